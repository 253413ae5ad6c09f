//! Resource directory state: live snapshot + category/search filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resources page owns one `RwSignal<ResourcesState>`. The collection
//! subscription replaces `resources` wholesale on every snapshot; the
//! filter controls only touch `category` and `query`.
//!
//! Documents are loosely cast: missing strings become `""`, missing lists
//! `[]`, and a missing timestamp `0`.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use serde_json::Value;

/// Category tags offered by the filter chips and the admin resource form.
pub const RESOURCE_CATEGORIES: &[&str] =
    &["Food", "Health", "Education", "Recreation", "Housing", "Employment", "Family", "Seniors"];

/// Indoor/outdoor designations offered by the admin resource form.
pub const INDOOR_OUTDOOR_OPTIONS: &[&str] = &["Indoor", "Outdoor", "Both"];

/// Display record for one document of the `resources` collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub address: String,
    pub community: String,
    pub contact: String,
    pub indoor_outdoor: String,
    pub tags: Vec<String>,
    pub description: String,
    pub created_at: i64,
}

impl Resource {
    pub fn from_document(doc: &Value) -> Self {
        Self {
            id: str_field(doc, "id"),
            name: str_field(doc, "name"),
            address: str_field(doc, "address"),
            community: str_field(doc, "community"),
            contact: str_field(doc, "contact"),
            // Older documents were written with camelCase keys.
            indoor_outdoor: first_present(doc, &["indoor_outdoor", "indoorOutdoor"]),
            tags: doc
                .get("tags")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(Value::as_str).map(str::to_owned).collect())
                .unwrap_or_default(),
            description: str_field(doc, "description"),
            created_at: created_at_ms(doc.get("created_at").or_else(|| doc.get("createdAt"))),
        }
    }

    /// Case-insensitive substring match over every text field.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        let haystack = [
            self.name.as_str(),
            self.address.as_str(),
            self.community.as_str(),
            self.contact.as_str(),
            self.indoor_outdoor.as_str(),
            &self.tags.join(" "),
            self.description.as_str(),
        ]
        .join(" ")
        .to_lowercase();
        haystack.contains(&needle)
    }

    pub fn has_tag(&self, category: &str) -> bool {
        self.tags.iter().any(|t| t == category)
    }
}

fn str_field(doc: &Value, key: &str) -> String {
    doc.get(key).and_then(Value::as_str).unwrap_or_default().to_owned()
}

fn first_present(doc: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| doc.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_owned()
}

#[allow(clippy::cast_possible_truncation)]
fn created_at_ms(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        _ => 0,
    }
}

/// Map a snapshot into display records, newest first.
pub fn resources_from_snapshot(docs: &[Value]) -> Vec<Resource> {
    let mut resources: Vec<Resource> = docs.iter().map(Resource::from_document).collect();
    resources.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    resources
}

/// Category AND free-text filter. `None` category passes everything.
pub fn matches_filter(resource: &Resource, category: Option<&str>, query: &str) -> bool {
    category.is_none_or(|c| resource.has_tag(c)) && resource.matches_query(query)
}

#[derive(Clone, Debug, Default)]
pub struct ResourcesState {
    pub resources: Vec<Resource>,
    pub loading: bool,
    pub error: Option<String>,
    pub category: Option<String>,
    pub query: String,
}

impl ResourcesState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Replace the displayed set with a fresh snapshot.
    pub fn apply_snapshot(&mut self, docs: &[Value]) {
        self.resources = resources_from_snapshot(docs);
        self.loading = false;
        self.error = None;
    }

    /// Record a subscription failure. The view shows zero records.
    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.resources.clear();
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Clicking the active chip clears the category.
    pub fn toggle_category(&mut self, category: &str) {
        if self.category.as_deref() == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category.to_owned());
        }
    }

    pub fn visible(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .filter(|r| matches_filter(r, self.category.as_deref(), &self.query))
            .cloned()
            .collect()
    }
}
