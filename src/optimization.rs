//! 설비 개선 권고 목록.

use crate::i18n::Translator;

/// 연소 설비에 적용 가능한 개선 조치.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// 배가스 열 회수용 이코노마이저
    Economizer,
    /// 단열 보강으로 복사/대류 손실 저감
    Insulation,
    /// 자동 급탄으로 연소 안정화
    AutomatedFeed,
    /// 연소 전 건조로 PCI 향상
    FuelDrying,
    /// 배출 감시 센서
    EmissionSensors,
    /// 전기집진기
    ElectrostaticFilter,
    /// 재(ash) 활용
    AshValorisation,
    /// 열병합 발전
    Cogeneration,
}

const SUGGESTIONS: &[Suggestion] = &[
    Suggestion::Economizer,
    Suggestion::Insulation,
    Suggestion::AutomatedFeed,
    Suggestion::FuelDrying,
    Suggestion::EmissionSensors,
    Suggestion::ElectrostaticFilter,
    Suggestion::AshValorisation,
    Suggestion::Cogeneration,
];

pub fn optimization_suggestions() -> &'static [Suggestion] {
    SUGGESTIONS
}

impl Suggestion {
    fn key(self) -> &'static str {
        match self {
            Suggestion::Economizer => "suggestion.economizer",
            Suggestion::Insulation => "suggestion.insulation",
            Suggestion::AutomatedFeed => "suggestion.automated_feed",
            Suggestion::FuelDrying => "suggestion.fuel_drying",
            Suggestion::EmissionSensors => "suggestion.emission_sensors",
            Suggestion::ElectrostaticFilter => "suggestion.electrostatic_filter",
            Suggestion::AshValorisation => "suggestion.ash_valorisation",
            Suggestion::Cogeneration => "suggestion.cogeneration",
        }
    }

    pub fn label(self, tr: &Translator) -> &'static str {
        tr.t(self.key())
    }
}
