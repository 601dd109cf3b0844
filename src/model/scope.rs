//! Which orders a view asks for, and who is asking.

use jiff::civil::Date;
use jiff::Zoned;
use std::fmt::Display;
use std::time::Duration;

/// Size of the customer's "recent orders" window, in days.
pub const RECENT_WINDOW_DAYS: u16 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySelector {
    /// The local calendar day at the moment of each fetch.
    Current,
    On(Date),
}

impl DaySelector {
    pub fn resolve(self) -> Date {
        match self {
            DaySelector::Current => Zoned::now().date(),
            DaySelector::On(date) => date,
        }
    }
}

/// A role- and time-window-dependent order query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderScope {
    /// The customer's orders of today. The server filters by the bearer token.
    Today,
    /// The customer's orders of the last [`RECENT_WINDOW_DAYS`] days.
    Recent,
    /// Every order of the customer.
    All,
    /// Every order of one day, as staff see them.
    Day(DaySelector),
}

impl OrderScope {
    /// Whether orders turning ready in this scope are worth telling the viewer about.
    ///
    /// Only the current day counts; an older order still marked ready is not news.
    pub fn announces_ready(self) -> bool {
        matches!(self, OrderScope::Today | OrderScope::Day(_))
    }
}

impl Display for OrderScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderScope::Today => f.write_str("today"),
            OrderScope::Recent => write!(f, "last-{RECENT_WINDOW_DAYS}-days"),
            OrderScope::All => f.write_str("all"),
            OrderScope::Day(DaySelector::Current) => f.write_str("day:current"),
            OrderScope::Day(DaySelector::On(date)) => write!(f, "day:{date}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Role {
    Customer,
    Waiter,
    Kitchen,
}

impl Role {
    /// Scopes the role's order view keeps fresh.
    pub fn poll_scopes(self) -> Vec<OrderScope> {
        match self {
            Role::Customer => vec![OrderScope::Today, OrderScope::Recent],
            Role::Waiter | Role::Kitchen => vec![OrderScope::Day(DaySelector::Current)],
        }
    }

    pub fn default_poll_interval(self) -> Duration {
        match self {
            Role::Customer => Duration::from_secs(30),
            Role::Kitchen => Duration::from_secs(15),
            Role::Waiter => Duration::from_secs(10),
        }
    }

    /// Kitchen staff produce the "ready" transition themselves and are not told about it.
    pub fn announces_ready(self) -> bool {
        !matches!(self, Role::Kitchen)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => f.write_str("customer"),
            Role::Waiter => f.write_str("waiter"),
            Role::Kitchen => f.write_str("kitchen"),
        }
    }
}
