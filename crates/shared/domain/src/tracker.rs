use crate::constants::{BLOG, BUG, DOCUMENTATION, EPIC, FEATURE, TASK, TOOLS, WEBSITE};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A work-tracking project identified by a short uppercase key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueProject {
    pub key: String,
    pub name: String,
    pub description: String,
}

impl IssueProject {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self { key: key.into(), name: name.into(), description: description.into() }
    }
}

bitflags! {
    /// Issue types recognized by the tracker integration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct IssueTypes: u8 {
        const EPIC = 1 << 0;
        const BUG = 1 << 1;
        const FEATURE = 1 << 2;
        const TASK = 1 << 3;

        const ALL = Self::EPIC.bits() | Self::BUG.bits() | Self::FEATURE.bits() | Self::TASK.bits();
    }
}

bitflags! {
    /// Tag labels recognized by the tracker integration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Labels: u8 {
        const TOOLS = 1 << 0;
        const DOCUMENTATION = 1 << 1;
        const BLOG = 1 << 2;
        const WEBSITE = 1 << 3;

        const ALL = Self::TOOLS.bits() | Self::DOCUMENTATION.bits() | Self::BLOG.bits() | Self::WEBSITE.bits();
    }
}

/// Display names for single-bit flags; serialization goes through these.
macro_rules! named_flags {
    ($ty:ident { $($flag:ident => $name:expr),+ $(,)? }) => {
        impl $ty {
            const NAMED: &'static [(&'static str, Self)] = &[$(($name, Self::$flag)),+];

            /// Resolves a display name (case-sensitive) to its flag.
            #[must_use]
            pub fn from_display_name(name: &str) -> Option<Self> {
                Self::NAMED.iter().find(|(n, _)| *n == name).map(|(_, flag)| *flag)
            }

            /// Display names of the contained flags, in declaration order.
            pub fn display_names(self) -> impl Iterator<Item = &'static str> {
                Self::NAMED.iter().filter(move |(_, flag)| self.contains(*flag)).map(|(n, _)| *n)
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_seq(self.display_names())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let names = Vec::<String>::deserialize(deserializer)?;
                names.iter().try_fold(Self::empty(), |acc, name| {
                    Self::from_display_name(name).map(|flag| acc | flag).ok_or_else(|| {
                        <D::Error as serde::de::Error>::custom(format!(
                            "unknown {} '{name}'",
                            stringify!($ty)
                        ))
                    })
                })
            }
        }
    };
}

named_flags!(IssueTypes { EPIC => EPIC, BUG => BUG, FEATURE => FEATURE, TASK => TASK });
named_flags!(Labels { TOOLS => TOOLS, DOCUMENTATION => DOCUMENTATION, BLOG => BLOG, WEBSITE => WEBSITE });

/// Jira Cloud integration metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueTracker {
    pub account_email: String,
    /// Host of the Jira Cloud instance, e.g. `limebird.atlassian.net`.
    pub cloud_instance: String,
    pub api_base_url: String,
    /// Project key used when a caller asks for a project URL without naming one.
    pub default_project: String,
    /// Alias → project. Aliases are free-form; lookups go by [`IssueProject::key`].
    pub projects: BTreeMap<String, IssueProject>,
    pub issue_types: IssueTypes,
    pub labels: Labels,
}

impl Default for IssueTracker {
    fn default() -> Self {
        let projects = BTreeMap::from([
            (
                "limebird".to_owned(),
                IssueProject::new("SCRUM", "Limebird.org", "Main website and development project"),
            ),
            (
                "taskmaster".to_owned(),
                IssueProject::new("TAS", "Taskmaster", "Task management and productivity project"),
            ),
        ]);

        Self {
            account_email: "Limebird73@gmail.com".to_owned(),
            cloud_instance: "limebird.atlassian.net".to_owned(),
            api_base_url: "https://limebird.atlassian.net/rest/api/3".to_owned(),
            default_project: "SCRUM".to_owned(),
            projects,
            issue_types: IssueTypes::ALL,
            labels: Labels::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_declaration_order() {
        let names: Vec<_> = (IssueTypes::TASK | IssueTypes::EPIC).display_names().collect();
        assert_eq!(names, vec![EPIC, TASK]);
        assert_eq!(Labels::ALL.display_names().count(), 4);
    }

    #[test]
    fn display_name_lookup_is_case_sensitive() {
        assert_eq!(Labels::from_display_name("Blog"), Some(Labels::BLOG));
        assert_eq!(Labels::from_display_name("blog"), None);
        assert_eq!(IssueTypes::from_display_name("Feature"), Some(IssueTypes::FEATURE));
    }
}
