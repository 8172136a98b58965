//! The [`FieldName`] key.

use std::fmt;

/// A `(field type, field identifier)` pair identifying one quantity in a
/// registry.
///
/// The field type partitions quantities by origin or convention (`"gas"`
/// for the canonical fluid fields, a frontend name such as `"athena"` for
/// dataset-native ones, `"index"` for grid geometry). Vector components
/// follow the axis naming of the dataset's geometry, e.g.
/// `magnetic_field_x` or `magnetic_field_theta`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName {
    ftype: String,
    name: String,
}

impl FieldName {
    /// Build a field name from its two parts.
    pub fn new(ftype: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ftype: ftype.into(),
            name: name.into(),
        }
    }

    /// Field type, e.g. `"gas"`.
    pub fn ftype(&self) -> &str {
        &self.ftype
    }

    /// Field identifier, e.g. `"magnetic_field_strength"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The component `<name>_<axis>` of a vector family under the same
    /// field type.
    ///
    /// ```
    /// use gauge_core::FieldName;
    ///
    /// let bx = FieldName::new("gas", "magnetic_field").component("x");
    /// assert_eq!(bx, FieldName::new("gas", "magnetic_field_x"));
    /// ```
    pub fn component(&self, axis: &str) -> FieldName {
        FieldName::new(self.ftype.clone(), format!("{}_{axis}", self.name))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', '{}')", self.ftype, self.name)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for FieldName {
    fn from((ftype, name): (A, B)) -> Self {
        FieldName::new(ftype, name)
    }
}
