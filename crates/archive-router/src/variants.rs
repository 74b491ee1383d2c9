//! Named route configurations.
//!
//! Each build of the front end ships one of these tables. They all go
//! through [`RouteTableBuilder`], so the resolver logic exists once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::{RouteTable, RouteTableBuilder};
use crate::view::View;

/// A named route configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Every view: accounts, campaigns, posts and attachments.
    #[default]
    Full,
    /// The archive without the campaign pages.
    Archive,
    /// Landing page plus the campaign pages.
    Campaigns,
}

fn index(builder: RouteTableBuilder<View>) -> RouteTableBuilder<View> {
    builder.named_route("index", "/", View::Index)
}

fn accounts(builder: RouteTableBuilder<View>) -> RouteTableBuilder<View> {
    builder
        .named_route("accounts", "/accounts", View::Accounts)
        .named_route("account", "/accounts/:fqn", View::Account)
}

fn campaigns(builder: RouteTableBuilder<View>) -> RouteTableBuilder<View> {
    builder
        .named_route(
            "campaign_accounts",
            "/campaigns/accounts",
            View::CampaignAccounts,
        )
        .named_route(
            "campaign_account",
            "/campaigns/accounts/:fqn",
            View::CampaignAccount,
        )
}

fn posts(builder: RouteTableBuilder<View>) -> RouteTableBuilder<View> {
    builder
        .named_route("posts", "/posts", View::Posts)
        .named_route("post", "/posts/:id", View::Post)
}

fn attachments(builder: RouteTableBuilder<View>) -> RouteTableBuilder<View> {
    builder.named_route("attachments", "/attachments", View::Attachments)
}

impl Variant {
    /// All variants.
    pub const ALL: [Self; 3] = [Self::Full, Self::Archive, Self::Campaigns];

    /// Returns the variant's name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Archive => "archive",
            Self::Campaigns => "campaigns",
        }
    }

    /// Returns the builder holding this variant's routes.
    #[must_use]
    pub fn builder(self) -> RouteTableBuilder<View> {
        let builder = index(RouteTable::builder());
        match self {
            Self::Full => attachments(posts(campaigns(accounts(builder)))),
            Self::Archive => attachments(posts(accounts(builder))),
            Self::Campaigns => campaigns(builder),
        }
    }

    /// Builds this variant's route table.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteTableBuilder::build`] errors.
    pub fn table(self) -> Result<RouteTable<View>> {
        self.builder().build()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown variant: {s}"))
    }
}
