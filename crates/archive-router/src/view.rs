//! Views of the archive application.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A renderable screen of the archive front end.
///
/// The resolver treats views as opaque; this enum is what the archive's
/// own tables bind patterns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Landing page.
    Index,
    /// All archived accounts.
    Accounts,
    /// A single account, addressed by its fully qualified name.
    Account,
    /// Accounts that run fundraising campaigns.
    CampaignAccounts,
    /// Campaigns of a single account.
    CampaignAccount,
    /// All archived posts.
    Posts,
    /// A single post.
    Post,
    /// Archived media attachments.
    Attachments,
}

impl View {
    /// All views, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Index,
        Self::Accounts,
        Self::Account,
        Self::CampaignAccounts,
        Self::CampaignAccount,
        Self::Posts,
        Self::Post,
        Self::Attachments,
    ];

    /// Returns the view's identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Accounts => "accounts",
            Self::Account => "account",
            Self::CampaignAccounts => "campaign_accounts",
            Self::CampaignAccount => "campaign_account",
            Self::Posts => "posts",
            Self::Post => "post",
            Self::Attachments => "attachments",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown view: {s}"))
    }
}
