use crate::{Deal, Priority, ValueBand, Verification};

/// Active filter-bar selections. `None` means the predicate is inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub priority: Option<Priority>,
    pub sector: Option<String>,
    pub verification: Option<Verification>,
    pub value: Option<ValueBand>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.priority.is_none()
            && self.sector().is_none()
            && self.verification.is_none()
            && self.value.is_none()
    }

    /// Sector selection, treating a blank string as unset
    fn sector(&self) -> Option<&str> {
        self.sector.as_deref().filter(|s| !s.is_empty())
    }

    /// AND of every active predicate
    pub fn matches(&self, deal: &Deal) -> bool {
        self.priority.is_none_or(|p| deal.priority == p)
            && self.sector().is_none_or(|s| deal.has_sector(s))
            && self.verification.is_none_or(|v| v.matches(deal.tier))
            && self.value.is_none_or(|v| v.matches(deal.amount))
    }
}
