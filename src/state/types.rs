//! Core value types used by Pokedex state.

/// Direction the remote source orders records by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// A → Z.
    #[default]
    Asc,
    /// Z → A.
    Desc,
}

impl OrderDirection {
    /// Return the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// GraphQL `order_by` enum literal.
    #[must_use]
    pub const fn as_graphql(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Short label for the controls row.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "Ascending ▲",
            Self::Desc => "Descending ▼",
        }
    }

    /// Parse a direction from a settings value or CLI flag (case-insensitive).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "up" => Some(Self::Asc),
            "desc" | "descending" | "down" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Stat a search restricts with the min/max range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatName {
    /// Hit points.
    #[default]
    Hp,
    /// Physical attack.
    Attack,
    /// Physical defense.
    Defense,
    /// Speed.
    Speed,
}

impl StatName {
    /// Every selectable stat in selector order.
    pub const ALL: [Self; 4] = [Self::Hp, Self::Attack, Self::Defense, Self::Speed];

    /// Stat name as used by the remote schema.
    #[must_use]
    pub const fn as_api_name(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Speed => "speed",
        }
    }

    /// Human label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::Speed => "Speed",
        }
    }

    /// What: Step through the selector by `delta` positions, wrapping around.
    ///
    /// Inputs:
    /// - `delta`: `1` for next, `-1` for previous
    ///
    /// Output:
    /// - The stat at the new position.
    #[must_use]
    pub fn cycled(self, delta: isize) -> Self {
        cycle_in(&Self::ALL, self, delta)
    }

    /// Parse from the remote name or label (case-insensitive).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hp" => Some(Self::Hp),
            "attack" | "atk" => Some(Self::Attack),
            "defense" | "def" => Some(Self::Defense),
            "speed" | "spd" => Some(Self::Speed),
            _ => None,
        }
    }
}

/// Sorting key applied locally to the displayed list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by name.
    #[default]
    Name,
    /// Highest HP first.
    Hp,
    /// Highest attack first.
    Attack,
    /// Highest defense first.
    Defense,
}

impl SortKey {
    /// Every sort key in dropdown order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Hp, Self::Attack, Self::Defense];

    /// Human label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
        }
    }

    /// Next/previous key, wrapping.
    #[must_use]
    pub fn cycled(self, delta: isize) -> Self {
        cycle_in(&Self::ALL, self, delta)
    }

    /// Return the string key used in settings files for this sort key.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
        }
    }

    /// Parse a sort key from its settings key (case-insensitive).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" | "alphabetical" => Some(Self::Name),
            "hp" => Some(Self::Hp),
            "attack" => Some(Self::Attack),
            "defense" => Some(Self::Defense),
            _ => None,
        }
    }
}

/// Step `current` by `delta` inside `all`, wrapping at both ends.
fn cycle_in<T: Copy + PartialEq>(all: &[T], current: T, delta: isize) -> T {
    let len = all.len().cast_signed();
    let pos = all.iter().position(|v| *v == current).unwrap_or(0).cast_signed();
    let next = (pos + delta).rem_euclid(len);
    all[next.cast_unsigned()]
}

/// Lower stat bound used when the min input is empty or not a number.
pub const DEFAULT_MIN_STAT: i32 = 0;
/// Upper stat bound used when the max input is empty or not a number.
pub const DEFAULT_MAX_STAT: i32 = 9999;
/// Number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 16;

/// User-controlled parameters governing the fetch and the local filter/sort.
///
/// `min_value`/`max_value` keep the raw input text; numeric coercion happens
/// when a fetch is built (see [`FilterCriteria::min_bound`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Name substring typed by the user.
    pub search_text: String,
    /// Stat restricted by the min/max range.
    pub stat: StatName,
    /// Raw min input.
    pub min_value: String,
    /// Raw max input.
    pub max_value: String,
    /// Type id to keep; `None` shows all.
    pub selected_type_id: Option<i64>,
    /// Local sort key.
    pub sort_key: SortKey,
    /// Remote ordering.
    pub order: OrderDirection,
    /// 1-based page number.
    pub page: u32,
    /// Records per page.
    pub page_size: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            stat: StatName::default(),
            min_value: String::new(),
            max_value: String::new(),
            selected_type_id: None,
            sort_key: SortKey::default(),
            order: OrderDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterCriteria {
    /// Min stat bound, coerced to [`DEFAULT_MIN_STAT`] when blank, malformed or
    /// outside the GraphQL `Int` range.
    #[must_use]
    pub fn min_bound(&self) -> i32 {
        coerce_bound(&self.min_value, DEFAULT_MIN_STAT)
    }

    /// Max stat bound, coerced to [`DEFAULT_MAX_STAT`] when blank, malformed or
    /// outside the GraphQL `Int` range.
    #[must_use]
    pub fn max_bound(&self) -> i32 {
        coerce_bound(&self.max_value, DEFAULT_MAX_STAT)
    }

    /// Offset of the first record of the current page.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.page.max(1).saturating_sub(1).saturating_mul(self.page_size)
    }

    /// `%text%` for a non-blank search, `%` otherwise.
    #[must_use]
    pub fn name_pattern(&self) -> String {
        let text = self.search_text.trim();
        if text.is_empty() {
            "%".to_string()
        } else {
            format!("%{text}%")
        }
    }
}

fn coerce_bound(raw: &str, default: i32) -> i32 {
    raw.trim().parse::<i32>().unwrap_or(default)
}

/// Parameters of a single records query, derived from [`FilterCriteria`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchParams {
    /// Remote ordering by name.
    pub order: OrderDirection,
    /// Maximum number of records.
    pub limit: u32,
    /// Records to skip.
    pub offset: u32,
    /// `_ilike` pattern on the name.
    pub name_pattern: String,
    /// Stat the range applies to.
    pub stat: StatName,
    /// Inclusive lower bound.
    pub min_stat: i32,
    /// Inclusive upper bound.
    pub max_stat: i32,
}

impl From<&FilterCriteria> for FetchParams {
    fn from(c: &FilterCriteria) -> Self {
        Self {
            order: c.order,
            limit: c.page_size,
            offset: c.offset(),
            name_pattern: c.name_pattern(),
            stat: c.stat,
            min_stat: c.min_bound(),
            max_stat: c.max_bound(),
        }
    }
}

/// Fetch request sent to the background fetch worker.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Query parameters.
    pub params: FetchParams,
}

/// Result corresponding to a prior [`FetchRequest`].
#[derive(Clone, Debug)]
pub struct FetchResponse {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Records, or a display-ready failure message.
    pub outcome: Result<Vec<crate::state::RawRecord>, String>,
}

/// Loading indicator state of the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// A fetch is in flight.
    #[default]
    Loading,
    /// The displayed list reflects the last fetch.
    Ready,
    /// The last fetch failed; the list is empty because of the failure.
    Failed(String),
}

/// Which input currently receives key presses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Name search field.
    Name,
    /// Stat selector.
    Stat,
    /// Min value field.
    Min,
    /// Max value field.
    Max,
    /// Card grid.
    #[default]
    Cards,
}

impl Focus {
    /// Focus ring order.
    pub const RING: [Self; 5] = [Self::Name, Self::Stat, Self::Min, Self::Max, Self::Cards];

    /// Next/previous element of the focus ring.
    #[must_use]
    pub fn cycled(self, delta: isize) -> Self {
        cycle_in(&Self::RING, self, delta)
    }

    /// Whether the focus is on one of the search form inputs.
    #[must_use]
    pub const fn is_form(self) -> bool {
        !matches!(self, Self::Cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Blank or malformed bounds fall back to the defaults
    ///
    /// - Input: empty, whitespace, non-numeric and numeric inputs
    /// - Output: 0/9999 for the fallbacks, parsed value otherwise
    fn bounds_coerce_to_defaults() {
        let mut c = FilterCriteria::default();
        assert_eq!(c.min_bound(), 0);
        assert_eq!(c.max_bound(), 9999);
        c.min_value = "  ".into();
        c.max_value = "abc".into();
        assert_eq!(c.min_bound(), 0);
        assert_eq!(c.max_bound(), 9999);
        c.min_value = "45".into();
        c.max_value = " 120 ".into();
        assert_eq!(c.min_bound(), 45);
        assert_eq!(c.max_bound(), 120);
    }

    #[test]
    /// What: Bounds too large for a GraphQL `Int` fall back to the defaults
    ///
    /// - Input: eleven-digit min/max text, as the digits-only fields allow
    /// - Output: 0/9999 in both the criteria and the derived fetch params
    fn oversized_bounds_coerce_to_defaults() {
        let c = FilterCriteria {
            min_value: "99999999999".into(),
            max_value: "99999999999".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(c.min_bound(), DEFAULT_MIN_STAT);
        assert_eq!(c.max_bound(), DEFAULT_MAX_STAT);
        let params = FetchParams::from(&c);
        assert_eq!(params.min_stat, 0);
        assert_eq!(params.max_stat, 9999);
        let at_limit = FilterCriteria {
            max_value: "2147483647".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(at_limit.max_bound(), i32::MAX);
    }

    #[test]
    /// What: Name pattern wraps non-blank text and is a bare wildcard otherwise
    fn name_pattern_wildcards() {
        let mut c = FilterCriteria::default();
        assert_eq!(c.name_pattern(), "%");
        c.search_text = "   ".into();
        assert_eq!(c.name_pattern(), "%");
        c.search_text = " chu ".into();
        assert_eq!(c.name_pattern(), "%chu%");
    }

    #[test]
    /// What: Offsets are page-size multiples and never negative
    fn offset_follows_page() {
        let mut c = FilterCriteria::default();
        assert_eq!(c.offset(), 0);
        c.page = 3;
        assert_eq!(c.offset(), 32);
        c.page = 0;
        assert_eq!(c.offset(), 0);
    }

    #[test]
    /// What: Cycling wraps in both directions
    fn cycling_wraps() {
        assert_eq!(SortKey::Defense.cycled(1), SortKey::Name);
        assert_eq!(SortKey::Name.cycled(-1), SortKey::Defense);
        assert_eq!(StatName::Hp.cycled(1), StatName::Attack);
        assert_eq!(Focus::Cards.cycled(1), Focus::Name);
        assert_eq!(Focus::Name.cycled(-1), Focus::Cards);
        assert_eq!(OrderDirection::Asc.toggled(), OrderDirection::Desc);
    }

    #[test]
    /// What: Config keys round through the parsers, including aliases
    fn config_keys_parse() {
        for k in SortKey::ALL {
            assert_eq!(SortKey::from_config_key(k.as_config_key()), Some(k));
        }
        assert_eq!(StatName::from_config_key("SPD"), Some(StatName::Speed));
        assert_eq!(
            OrderDirection::from_config_key("Descending"),
            Some(OrderDirection::Desc)
        );
        assert_eq!(SortKey::from_config_key("weight"), None);
    }
}
