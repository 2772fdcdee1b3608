use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceType for ObjectType {
    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where
    /// this [`ObjectType`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        self.0.def_location()
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The fields defined on this type, in schema definition order (fields
    /// added by type extensions come after the ones on the definition).
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of the interfaces this type declares it implements.
    pub fn interface_names(&self) -> &Vec<String> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
