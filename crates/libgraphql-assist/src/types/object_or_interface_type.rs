use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
pub trait ObjectOrInterfaceType {
    fn def_location(&self) -> &loc::SchemaDefLocation;
    fn description(&self) -> Option<&str>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> &Vec<String>;
    fn name(&self) -> &str;
}
