//! Reading the Jira activity stream, an Atom feed.
//!
//! Only the Atom elements are mapped; the `activity:` and `usr:` extensions Jira adds are
//! skipped.
use chrono::{DateTime, FixedOffset};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{Jira, JiraError, Request, Result, Transport};

pub const ATOM_MEDIA_TYPE: &str = "application/atom+xml";

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ActivityFeed {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub id: String,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub author: Option<Person>,
    #[serde(rename = "entry", default)]
    pub entries: Vec<ActivityItem>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ActivityItem {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub id: String,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub author: Option<Person>,
    pub summary: Option<Text>,
    #[serde(rename = "category", default)]
    pub categories: Vec<Category>,
}

impl ActivityItem {
    /// Target of the `alternate` link, the page the entry is about
    #[must_use]
    pub fn alternate_link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.rel.as_deref().map_or(true, |rel| rel == "alternate"))
            .map(|link| link.href.as_str())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Link {
    #[serde(rename = "@rel", default)]
    pub rel: Option<String>,
    #[serde(rename = "@href", default)]
    pub href: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Atom text construct, `kind` being `text`, `html` or `xhtml`
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Text {
    #[serde(rename = "@type", default)]
    pub kind: Option<String>,
    #[serde(rename = "$text", default)]
    pub body: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "@term", default)]
    pub term: String,
}

impl ActivityFeed {
    /// # Errors
    /// [`JiraError::Feed`] if `xml` is not an Atom feed
    pub fn parse(xml: &[u8]) -> Result<ActivityFeed> {
        Ok(quick_xml::de::from_reader(xml)?)
    }
}

impl<T: Transport> Jira<T> {
    /// Activity stream of a single user
    #[allow(clippy::missing_errors_doc)]
    pub fn user_activity(&self, user: &str) -> Result<ActivityFeed> {
        let mut url = self.activity_url()?;
        url.query_pairs_mut()
            .append_pair("streams", &format!("user IS {user}"));
        self.activity(url.as_str())
    }

    /// Reads the activity feed at `url`, which may be relative to the Jira host
    #[allow(clippy::missing_errors_doc)]
    pub fn activity(&self, url: &str) -> Result<ActivityFeed> {
        let url = self.host().join(url)?;
        let response =
            self.send(Request::new(Method::GET, url.clone()).accepting(ATOM_MEDIA_TYPE))?;
        if !response.status.is_success() {
            return Err(JiraError::from_status(response.status, &response.body, url.as_str()));
        }
        ActivityFeed::parse(&response.body)
    }
}
