//! Declared permission requirements and the per-process index.
//!
//! A requirement is attached to exactly one `(controller, action)` pair. The
//! index is populated once from the route registration table at startup and
//! never mutated afterwards, so concurrent reads need no locking. A pair with
//! no registered requirement is deliberately unrestricted (fail-open).

use std::collections::HashMap;

use serde::Serialize;

/// Key of a dispatched handler, `Controller@action` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActionKey {
    pub controller: &'static str,
    pub action: &'static str,
}

impl ActionKey {
    pub const fn new(controller: &'static str, action: &'static str) -> Self {
        Self { controller, action }
    }

    /// Wire form consumed by the remote permission service.
    pub fn qualified(&self) -> String {
        format!("{}@{}", self.controller, self.action)
    }
}

impl core::fmt::Display for ActionKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}@{}", self.controller, self.action)
    }
}

/// A declared menu/action permission, with the front-end metadata the
/// menu-sync consumer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionRequirement {
    /// Menu path, e.g. "管理后台:系统设置:角色管理".
    pub module: String,
    /// Operation label, e.g. "查看".
    pub action: String,
    pub icon: String,
    pub url: String,
    pub sort: i32,
    pub status: i32,
    /// Localized display names, keyed by locale tag.
    pub i18n_name: HashMap<String, String>,
}

impl PermissionRequirement {
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
            icon: String::new(),
            url: String::new(),
            sort: 0,
            status: 1,
            i18n_name: HashMap::new(),
        }
    }
}

/// Immutable map from dispatched action to its declared requirement.
#[derive(Debug, Default)]
pub struct PermissionIndex {
    entries: HashMap<ActionKey, PermissionRequirement>,
}

impl PermissionIndex {
    pub fn builder() -> PermissionIndexBuilder {
        PermissionIndexBuilder::default()
    }

    /// Exact-key lookup. `None` means no check is performed for the action.
    pub fn lookup(&self, key: &ActionKey) -> Option<&PermissionRequirement> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Structured dump for the menu-sync consumer.
    pub fn export(&self, micro: &str, version: i64) -> MenuExport {
        let mut annotations: Vec<MenuEntry> = self
            .entries
            .iter()
            .map(|(key, requirement)| MenuEntry {
                kind: "method",
                class: key.controller,
                method: key.action,
                action: key.qualified(),
                annotation: requirement.clone(),
            })
            .collect();
        annotations.sort_by(|a, b| a.action.cmp(&b.action));

        MenuExport {
            micro: micro.to_string(),
            annotations,
            version,
        }
    }
}

/// Collects registrations; duplicate keys keep the first registration.
#[derive(Debug, Default)]
pub struct PermissionIndexBuilder {
    entries: HashMap<ActionKey, PermissionRequirement>,
}

impl PermissionIndexBuilder {
    pub fn register(&mut self, key: ActionKey, requirement: PermissionRequirement) -> &mut Self {
        self.entries.entry(key).or_insert(requirement);
        self
    }

    pub fn build(self) -> PermissionIndex {
        PermissionIndex {
            entries: self.entries,
        }
    }
}

/// `{micro, annotations, version}` shape pushed to the menu service.
#[derive(Debug, Serialize)]
pub struct MenuExport {
    pub micro: String,
    pub annotations: Vec<MenuEntry>,
    pub version: i64,
}

#[derive(Debug, Serialize)]
pub struct MenuEntry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub class: &'static str,
    pub method: &'static str,
    pub action: String,
    pub annotation: PermissionRequirement,
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS_INDEX: ActionKey = ActionKey::new("UserController", "index");
    const USERS_DELETE: ActionKey = ActionKey::new("UserController", "delete");

    #[test]
    fn lookup_is_exact() {
        let mut builder = PermissionIndex::builder();
        builder.register(USERS_INDEX, PermissionRequirement::new("用户管理", "查看"));
        let index = builder.build();

        assert!(index.lookup(&USERS_INDEX).is_some());
        assert!(index.lookup(&USERS_DELETE).is_none());
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let mut builder = PermissionIndex::builder();
        builder.register(USERS_INDEX, PermissionRequirement::new("用户管理", "查看"));
        builder.register(USERS_INDEX, PermissionRequirement::new("用户管理", "删除"));
        let index = builder.build();

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(&USERS_INDEX).unwrap().action, "查看");
    }

    #[test]
    fn export_is_sorted_and_qualified() {
        let mut builder = PermissionIndex::builder();
        builder.register(USERS_DELETE, PermissionRequirement::new("用户管理", "删除"));
        builder.register(USERS_INDEX, PermissionRequirement::new("用户管理", "查看"));
        let export = builder.build().export("user", 1);

        assert_eq!(export.micro, "user");
        assert_eq!(export.annotations.len(), 2);
        assert_eq!(export.annotations[0].action, "UserController@delete");
        assert_eq!(export.annotations[1].action, "UserController@index");
    }
}
