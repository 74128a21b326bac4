use std::fmt::{self, Display};

///
/// Clinical significance categories that make it into the tracks.
///
/// The declaration order is the column order of every density matrix, so
/// variants must never be reordered or inserted in the middle.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub enum Significance {
    Benign,
    BenignLikelyBenign,
    LikelyBenign,
    UncertainSignificance,
    LikelyPathogenic,
    PathogenicLikelyPathogenic,
    Pathogenic,
    RiskFactor,
    ConflictingInterpretations,
}

impl Significance {
    pub const ALL: [Significance; 9] = [
        Significance::Benign,
        Significance::BenignLikelyBenign,
        Significance::LikelyBenign,
        Significance::UncertainSignificance,
        Significance::LikelyPathogenic,
        Significance::PathogenicLikelyPathogenic,
        Significance::Pathogenic,
        Significance::RiskFactor,
        Significance::ConflictingInterpretations,
    ];

    /// Number of density matrix columns.
    pub const COUNT: usize = Self::ALL.len();

    ///
    /// Parse a `CLNSIG` value. Returns `None` for anything outside the
    /// accepted categories, matching is case sensitive.
    ///
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Significance::Benign => "Benign",
            Significance::BenignLikelyBenign => "Benign/Likely_benign",
            Significance::LikelyBenign => "Likely_benign",
            Significance::UncertainSignificance => "Uncertain_significance",
            Significance::LikelyPathogenic => "Likely_pathogenic",
            Significance::PathogenicLikelyPathogenic => "Pathogenic/Likely_pathogenic",
            Significance::Pathogenic => "Pathogenic",
            Significance::RiskFactor => "risk_factor",
            Significance::ConflictingInterpretations => {
                "Conflicting_interpretations_of_pathogenicity"
            }
        }
    }

    /// Column of this category in a density matrix.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// Known ClinVar review statuses. The value is the whole `CLNREVSTAT`
/// annotation, commas included.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum ReviewStatus {
    MultipleSubmittersNoConflicts,
    SingleSubmitter,
    ConflictingInterpretations,
    NoAssertionCriteriaProvided,
    ReviewedByExpertPanel,
    PracticeGuideline,
    NoInterpretationForSingleVariant,
    NoAssertionProvided,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 8] = [
        ReviewStatus::MultipleSubmittersNoConflicts,
        ReviewStatus::SingleSubmitter,
        ReviewStatus::ConflictingInterpretations,
        ReviewStatus::NoAssertionCriteriaProvided,
        ReviewStatus::ReviewedByExpertPanel,
        ReviewStatus::PracticeGuideline,
        ReviewStatus::NoInterpretationForSingleVariant,
        ReviewStatus::NoAssertionProvided,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    ///
    /// Whether a record with this status may enter the tracks. Everything but
    /// `no_assertion_provided`, which carries no classification at all.
    ///
    pub fn is_accepted(&self) -> bool {
        !matches!(self, ReviewStatus::NoAssertionProvided)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::MultipleSubmittersNoConflicts => {
                "criteria_provided,_multiple_submitters,_no_conflicts"
            }
            ReviewStatus::SingleSubmitter => "criteria_provided,_single_submitter",
            ReviewStatus::ConflictingInterpretations => {
                "criteria_provided,_conflicting_interpretations"
            }
            ReviewStatus::NoAssertionCriteriaProvided => "no_assertion_criteria_provided",
            ReviewStatus::ReviewedByExpertPanel => "reviewed_by_expert_panel",
            ReviewStatus::PracticeGuideline => "practice_guideline",
            ReviewStatus::NoInterpretationForSingleVariant => {
                "no_interpretation_for_the_single_variant"
            }
            ReviewStatus::NoAssertionProvided => "no_assertion_provided",
        }
    }

    ///
    /// ClinVar gold stars for this status, 0 through 4.
    ///
    pub fn gold_stars(&self) -> u8 {
        match self {
            ReviewStatus::PracticeGuideline => 4,
            ReviewStatus::ReviewedByExpertPanel => 3,
            ReviewStatus::MultipleSubmittersNoConflicts => 2,
            ReviewStatus::SingleSubmitter | ReviewStatus::ConflictingInterpretations => 1,
            ReviewStatus::NoAssertionCriteriaProvided
            | ReviewStatus::NoInterpretationForSingleVariant
            | ReviewStatus::NoAssertionProvided => 0,
        }
    }
}

impl Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
