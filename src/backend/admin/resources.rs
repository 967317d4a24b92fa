/**
 * Admin Resources
 *
 * The record kinds exposed under `/admin/resources/{resource}` and the
 * per-view visibility of their properties.
 *
 * # Views
 *
 * - `list` - table of records
 * - `show` - a single record
 * - `edit` - create/update forms
 *
 * A property hidden from a view is stripped from records returned for it.
 * `users.password` is the one write-only property: editable, never shown.
 */

use serde::Serialize;
use serde_json::Value;

/// Record kinds managed by the admin surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Students,
    Teachers,
    Attendance,
    Marks,
}

/// Where a record is being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Show,
    Edit,
}

/// One property of a resource and the views it appears in
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Property {
    pub name: &'static str,
    pub list: bool,
    pub show: bool,
    pub edit: bool,
}

impl Property {
    const fn visible(name: &'static str) -> Self {
        Self {
            name,
            list: true,
            show: true,
            edit: true,
        }
    }

    /// Shown but not editable (ids, timestamps)
    const fn read_only(name: &'static str) -> Self {
        Self {
            name,
            list: true,
            show: true,
            edit: false,
        }
    }

    /// Editable but never shown
    const fn write_only(name: &'static str) -> Self {
        Self {
            name,
            list: false,
            show: false,
            edit: true,
        }
    }

    pub fn is_visible(&self, view: View) -> bool {
        match view {
            View::List => self.list,
            View::Show => self.show,
            View::Edit => self.edit,
        }
    }
}

const USER_PROPERTIES: &[Property] = &[
    Property::read_only("id"),
    Property::visible("name"),
    Property::visible("email"),
    Property::write_only("password"),
    Property::visible("role"),
    Property::read_only("createdAt"),
    Property::read_only("updatedAt"),
];

const STUDENT_PROPERTIES: &[Property] = &[
    Property::read_only("id"),
    Property::visible("userId"),
    Property::visible("className"),
    Property::visible("section"),
    Property::visible("rollNumber"),
    Property::visible("parentName"),
    Property::visible("contactNumber"),
    Property::read_only("createdAt"),
    Property::read_only("updatedAt"),
];

const TEACHER_PROPERTIES: &[Property] = &[
    Property::read_only("id"),
    Property::visible("userId"),
    Property::visible("subject"),
    Property::visible("qualification"),
    Property::visible("experienceYears"),
    Property::visible("salary"),
    Property::read_only("createdAt"),
    Property::read_only("updatedAt"),
];

const ATTENDANCE_PROPERTIES: &[Property] = &[
    Property::read_only("id"),
    Property::visible("studentId"),
    Property::visible("date"),
    Property::visible("status"),
];

const MARKS_PROPERTIES: &[Property] = &[
    Property::read_only("id"),
    Property::visible("studentId"),
    Property::visible("marksObtained"),
    Property::visible("totalMarks"),
];

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Users,
        Resource::Students,
        Resource::Teachers,
        Resource::Attendance,
        Resource::Marks,
    ];

    /// Resolve the `{resource}` path segment
    pub fn from_path(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == segment)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Students => "students",
            Resource::Teachers => "teachers",
            Resource::Attendance => "attendance",
            Resource::Marks => "marks",
        }
    }

    pub fn properties(&self) -> &'static [Property] {
        match self {
            Resource::Users => USER_PROPERTIES,
            Resource::Students => STUDENT_PROPERTIES,
            Resource::Teachers => TEACHER_PROPERTIES,
            Resource::Attendance => ATTENDANCE_PROPERTIES,
            Resource::Marks => MARKS_PROPERTIES,
        }
    }

    /// Keep only the properties of `record` visible in `view`
    ///
    /// Non-object values pass through unchanged.
    pub fn project(&self, view: View, record: Value) -> Value {
        let Value::Object(fields) = record else {
            return record;
        };
        let properties = self.properties();
        let kept = fields
            .into_iter()
            .filter(|(key, _)| {
                properties
                    .iter()
                    .any(|p| p.name == key.as_str() && p.is_visible(view))
            })
            .collect();
        Value::Object(kept)
    }
}

/// Catalogue entry returned by `GET /admin/resources`
#[derive(Debug, Clone, Serialize)]
pub struct ResourceInfo {
    pub name: &'static str,
    pub properties: &'static [Property],
}

/// Every resource with its properties
pub fn catalogue() -> Vec<ResourceInfo> {
    Resource::ALL
        .into_iter()
        .map(|resource| ResourceInfo {
            name: resource.name(),
            properties: resource.properties(),
        })
        .collect()
}
