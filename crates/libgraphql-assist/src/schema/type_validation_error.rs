use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// A type-reference problem discovered once every definition and extension
/// has been loaded.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type implements `{non_interface_type_name}`, but \
        `{non_interface_type_name}` is not an interface"
    )]
    ImplementsNonInterfaceType {
        loc: loc::SchemaDefLocation,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input object type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input object type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter of `{owner_name}` was declared with the \
        `{outputonly_type_name}` type, which is not an input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SchemaDefLocation,
        owner_name: String,
        outputonly_type_name: String,
        parameter_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{member_type_name}`, but this type is a {} type and \
        union members can only be object types.",
        member_type_kind.name(),
    )]
    InvalidUnionMemberTypeKind {
        location: loc::SchemaDefLocation,
        member_type_kind: GraphQLTypeKind,
        member_type_name: String,
        union_type_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SchemaDefLocation,
        undefined_type_name: String,
    },
}
