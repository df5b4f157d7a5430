use serde::{Deserialize, Serialize};

/// A permission facet together with whether it is set at all.
///
/// `-1` is "infinite power". Unset facets carry no meaningful number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlaggedValue {
    pub value: i32,
    pub has_value: bool,
}

impl FlaggedValue {
    pub const INFINITE: i32 = -1;

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            has_value: true,
        }
    }

    #[must_use]
    pub const fn unset() -> Self {
        Self {
            value: 0,
            has_value: false,
        }
    }

    #[must_use]
    pub const fn from_option(value: Option<i32>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::unset(),
        }
    }

    #[must_use]
    pub const fn as_option(self) -> Option<i32> {
        if self.has_value {
            Some(self.value)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn has_power(self) -> bool {
        self.has_value && (self.value > 0 || self.value == Self::INFINITE)
    }

    #[must_use]
    pub const fn has_infinite_power(self) -> bool {
        self.has_value && self.value == Self::INFINITE
    }

    /// Turns an unset value into an explicit zero so it takes part in comparisons.
    #[must_use]
    pub const fn zero_if_unset(self) -> Self {
        if self.has_value {
            self
        } else {
            Self::new(0)
        }
    }

    /// A required power of zero means "no requirement".
    #[must_use]
    pub const fn clear_flag_on_zero(self) -> Self {
        if self.has_value && self.value == 0 {
            Self::unset()
        } else {
            self
        }
    }
}

/// Whether `given` satisfies `required`.
#[must_use]
pub const fn permission_granted(required: FlaggedValue, given: FlaggedValue) -> bool {
    if !required.has_value {
        !given.has_value || given.value >= 0
    } else if !given.has_power() {
        false
    } else if given.has_infinite_power() {
        true
    } else if required.has_infinite_power() {
        false
    } else {
        given.value >= required.value
    }
}

/// [`permission_granted`] against a concrete required value.
#[must_use]
pub const fn permission_granted_value(required: i32, given: FlaggedValue) -> bool {
    permission_granted(FlaggedValue::new(required), given)
}

/// Per-container metadata packed into one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PermissionFlags(u8);

impl PermissionFlags {
    const HAS_DB_ROW: u8 = 1;
    const CHANNEL_SPECIFIC: u8 = 1 << 1;
    const VALUE_SET: u8 = 1 << 2;
    const GRANT_SET: u8 = 1 << 3;
    const SKIP: u8 = 1 << 4;
    const NEGATE: u8 = 1 << 5;
    const VALUE_UPDATE: u8 = 1 << 6;
    const GRANT_UPDATE: u8 = 1 << 7;

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    const fn contains(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    fn assign(&mut self, bit: u8, on: bool) {
        if on {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }

    #[must_use]
    pub const fn has_db_row(self) -> bool {
        self.contains(Self::HAS_DB_ROW)
    }

    /// The holder has at least one channel-scoped entry for this kind.
    #[must_use]
    pub const fn channel_specific(self) -> bool {
        self.contains(Self::CHANNEL_SPECIFIC)
    }

    #[must_use]
    pub const fn value_set(self) -> bool {
        self.contains(Self::VALUE_SET)
    }

    #[must_use]
    pub const fn grant_set(self) -> bool {
        self.contains(Self::GRANT_SET)
    }

    #[must_use]
    pub const fn skip(self) -> bool {
        self.contains(Self::SKIP)
    }

    #[must_use]
    pub const fn negate(self) -> bool {
        self.contains(Self::NEGATE)
    }

    #[must_use]
    pub const fn value_update_pending(self) -> bool {
        self.contains(Self::VALUE_UPDATE)
    }

    #[must_use]
    pub const fn grant_update_pending(self) -> bool {
        self.contains(Self::GRANT_UPDATE)
    }

    #[must_use]
    pub const fn update_pending(self) -> bool {
        self.contains(Self::VALUE_UPDATE | Self::GRANT_UPDATE)
    }

    #[must_use]
    pub const fn permission_set(self) -> bool {
        self.value_set() || self.grant_set()
    }

    pub(crate) fn set_has_db_row(&mut self, on: bool) {
        self.assign(Self::HAS_DB_ROW, on);
    }

    pub(crate) fn set_channel_specific(&mut self, on: bool) {
        self.assign(Self::CHANNEL_SPECIFIC, on);
    }

    pub(crate) fn set_value_set(&mut self, on: bool) {
        self.assign(Self::VALUE_SET, on);
    }

    pub(crate) fn set_grant_set(&mut self, on: bool) {
        self.assign(Self::GRANT_SET, on);
    }

    pub(crate) fn set_skip(&mut self, on: bool) {
        self.assign(Self::SKIP, on);
    }

    pub(crate) fn set_negate(&mut self, on: bool) {
        self.assign(Self::NEGATE, on);
    }

    pub(crate) fn mark_value_update(&mut self) {
        self.assign(Self::VALUE_UPDATE, true);
    }

    pub(crate) fn mark_grant_update(&mut self) {
        self.assign(Self::GRANT_UPDATE, true);
    }

    pub(crate) fn clear_updates(&mut self) {
        self.assign(Self::VALUE_UPDATE | Self::GRANT_UPDATE, false);
    }
}

/// Raw numeric facets; only meaningful where the matching `*_set` flag is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionValues {
    pub value: i32,
    pub grant: i32,
}

impl PermissionValues {
    #[must_use]
    pub const fn new(value: i32, grant: i32) -> Self {
        Self { value, grant }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionContainer {
    pub flags: PermissionFlags,
    pub values: PermissionValues,
}

impl PermissionContainer {
    pub const EMPTY: Self = Self {
        flags: PermissionFlags::empty(),
        values: PermissionValues { value: 0, grant: 0 },
    };

    #[must_use]
    pub const fn value(&self) -> FlaggedValue {
        if self.flags.value_set() {
            FlaggedValue::new(self.values.value)
        } else {
            FlaggedValue::unset()
        }
    }

    #[must_use]
    pub const fn grant(&self) -> FlaggedValue {
        if self.flags.grant_set() {
            FlaggedValue::new(self.values.grant)
        } else {
            FlaggedValue::unset()
        }
    }

    #[must_use]
    pub const fn facet(&self, facet: Facet) -> FlaggedValue {
        match facet {
            Facet::Value => self.value(),
            Facet::Grant => self.grant(),
        }
    }
}

/// Which numeric facet of a permission a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    #[default]
    Value,
    Grant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateAction {
    #[default]
    DoNothing,
    SetValue,
    DeleteValue,
}

/// One read-modify-write instruction for `set_permission`.
///
/// `skip`/`negate` of `None` leave the stored flag unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionUpdate {
    pub values: PermissionValues,
    pub value: UpdateAction,
    pub grant: UpdateAction,
    pub skip: Option<bool>,
    pub negate: Option<bool>,
}

impl PermissionUpdate {
    #[must_use]
    pub const fn set(value: i32, grant: i32) -> Self {
        Self {
            values: PermissionValues::new(value, grant),
            value: UpdateAction::SetValue,
            grant: UpdateAction::SetValue,
            skip: None,
            negate: None,
        }
    }

    #[must_use]
    pub const fn set_value(value: i32) -> Self {
        Self {
            values: PermissionValues::new(value, 0),
            value: UpdateAction::SetValue,
            grant: UpdateAction::DoNothing,
            skip: None,
            negate: None,
        }
    }

    #[must_use]
    pub const fn set_grant(grant: i32) -> Self {
        Self {
            values: PermissionValues::new(0, grant),
            value: UpdateAction::DoNothing,
            grant: UpdateAction::SetValue,
            skip: None,
            negate: None,
        }
    }

    #[must_use]
    pub const fn delete_value() -> Self {
        Self {
            values: PermissionValues::new(0, 0),
            value: UpdateAction::DeleteValue,
            grant: UpdateAction::DoNothing,
            skip: None,
            negate: None,
        }
    }

    #[must_use]
    pub const fn delete_grant() -> Self {
        Self {
            values: PermissionValues::new(0, 0),
            value: UpdateAction::DoNothing,
            grant: UpdateAction::DeleteValue,
            skip: None,
            negate: None,
        }
    }

    #[must_use]
    pub const fn delete_all() -> Self {
        Self {
            values: PermissionValues::new(0, 0),
            value: UpdateAction::DeleteValue,
            grant: UpdateAction::DeleteValue,
            skip: None,
            negate: None,
        }
    }

    #[must_use]
    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = Some(skip);
        self
    }

    #[must_use]
    pub fn with_negate(mut self, negate: bool) -> Self {
        self.negate = Some(negate);
        self
    }

    /// Applies the instruction to `container`, flagging touched facets for the next flush.
    pub(crate) fn apply(&self, container: &mut PermissionContainer) {
        let flags = &mut container.flags;
        match self.value {
            UpdateAction::DoNothing => {}
            UpdateAction::SetValue => {
                flags.set_value_set(true);
                flags.mark_value_update();
                container.values.value = self.values.value;
            }
            UpdateAction::DeleteValue => {
                flags.set_value_set(false);
                flags.mark_value_update();
                container.values.value = 0;
            }
        }
        match self.grant {
            UpdateAction::DoNothing => {}
            UpdateAction::SetValue => {
                flags.set_grant_set(true);
                flags.mark_grant_update();
                container.values.grant = self.values.grant;
            }
            UpdateAction::DeleteValue => {
                flags.set_grant_set(false);
                flags.mark_grant_update();
                container.values.grant = 0;
            }
        }
        if let Some(skip) = self.skip {
            if flags.skip() != skip {
                flags.set_skip(skip);
                flags.mark_value_update();
            }
        }
        if let Some(negate) = self.negate {
            if flags.negate() != negate {
                flags.set_negate(negate);
                flags.mark_value_update();
            }
        }
    }

    /// True when applying this instruction could change anything.
    pub(crate) const fn is_noop(&self) -> bool {
        matches!(self.value, UpdateAction::DoNothing)
            && matches!(self.grant, UpdateAction::DoNothing)
            && self.skip.is_none()
            && self.negate.is_none()
    }
}

/// A persisted row as handed to `load_permission`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionRecord {
    pub value: Option<i32>,
    pub grant: Option<i32>,
    pub skip: bool,
    pub negate: bool,
}

impl PermissionRecord {
    #[must_use]
    pub const fn value(value: i32) -> Self {
        Self {
            value: Some(value),
            grant: None,
            skip: false,
            negate: false,
        }
    }

    #[must_use]
    pub fn with_grant(mut self, grant: i32) -> Self {
        self.grant = Some(grant);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{
        permission_granted, permission_granted_value, FlaggedValue, PermissionContainer,
        PermissionUpdate,
    };

    #[test]
    fn grant_calculus_matches_power_rules() {
        let set = FlaggedValue::new;
        let unset = FlaggedValue::unset();
        assert!(permission_granted(set(50), set(100)));
        assert!(permission_granted(set(50), set(-1)));
        assert!(!permission_granted(set(-1), set(100)));
        assert!(!permission_granted(unset, set(-5)));
        assert!(permission_granted(unset, unset));
        assert!(permission_granted(unset, set(0)));
        assert!(!permission_granted(set(50), set(49)));
        assert!(permission_granted(set(50), set(50)));
        assert!(!permission_granted(set(1), unset));
        assert!(!permission_granted(set(0), set(0)));
        assert!(permission_granted(set(-1), set(-1)));
        assert!(permission_granted_value(75, set(75)));
    }

    #[test]
    fn infinite_power_given_with_no_requirement_is_treated_as_negative() {
        assert!(!permission_granted(
            FlaggedValue::unset(),
            FlaggedValue::new(FlaggedValue::INFINITE)
        ));
    }

    #[test]
    fn flagged_value_helpers() {
        assert_eq!(FlaggedValue::unset().zero_if_unset(), FlaggedValue::new(0));
        assert_eq!(FlaggedValue::new(7).zero_if_unset(), FlaggedValue::new(7));
        assert_eq!(FlaggedValue::new(0).clear_flag_on_zero(), FlaggedValue::unset());
        assert_eq!(FlaggedValue::new(3).clear_flag_on_zero(), FlaggedValue::new(3));
        assert!(FlaggedValue::new(-1).has_infinite_power());
        assert!(!FlaggedValue::new(-2).has_power());
        assert_eq!(FlaggedValue::from_option(Some(4)).as_option(), Some(4));
        assert_eq!(FlaggedValue::from_option(None).as_option(), None);
    }

    #[test]
    fn skip_change_marks_value_facet_pending() {
        let mut container = PermissionContainer::EMPTY;
        PermissionUpdate::default().with_skip(true).apply(&mut container);
        assert!(container.flags.skip());
        assert!(container.flags.value_update_pending());
        assert!(!container.flags.grant_update_pending());
        assert!(!container.flags.permission_set());
    }

    #[test]
    fn delete_clears_the_set_flag() {
        let mut container = PermissionContainer::EMPTY;
        PermissionUpdate::set(10, 20).apply(&mut container);
        assert_eq!(container.value(), FlaggedValue::new(10));
        assert_eq!(container.grant(), FlaggedValue::new(20));
        PermissionUpdate::delete_value().apply(&mut container);
        assert_eq!(container.value(), FlaggedValue::unset());
        assert_eq!(container.grant(), FlaggedValue::new(20));
    }
}
