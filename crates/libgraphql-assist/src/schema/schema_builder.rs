use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::MetaFields;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::schema::introspection;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "skip",
            "include",
            "deprecated",
            "specifiedBy",
        ])
    })
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}
impl GraphQLOperationType {
    fn default_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

/// Utility for building a [Schema].
///
/// ```
/// # use libgraphql_assist::schema::SchemaBuilder;
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")?
///     .build()?;
/// assert_eq!(schema.query_type().name(), "Query");
/// # Ok::<(), libgraphql_assist::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    type_extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives()?;
        self = self.load_builtin_str(introspection::INTROSPECTION_SDL)?;

        // Extensions may legally appear before the definition they extend, so
        // they are only merged once every definition has been seen.
        for (file_path, ext) in std::mem::take(&mut self.type_extensions) {
            self.visit_ast_type_extension(file_path.as_deref(), ext)?;
        }

        let query_type = self.resolve_operation_type(GraphQLOperationType::Query)?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            self.resolve_operation_type(GraphQLOperationType::Mutation)?;
        let subscription_type =
            self.resolve_operation_type(GraphQLOperationType::Subscription)?;

        let errors = validate_type_references(&self.types, &self.directive_defs);
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        log::debug!(
            "built schema with {} types and {} directives",
            self.types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            meta_fields: MetaFields::new(),
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        let types = IndexMap::from([
            ("Boolean".to_string(), GraphQLType::Bool),
            ("Float".to_string(), GraphQLType::Float),
            ("ID".to_string(), GraphQLType::ID),
            ("Int".to_string(), GraphQLType::Int),
            ("String".to_string(), GraphQLType::String),
        ]);

        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            type_extensions: vec![],
            types,
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        log::trace!("loading schema source `{}`", file_path.display());
        self.load_ast(Some(file_path.as_path()), content)?;
        Ok(self)
    }

    /// Definitions loaded through here get a
    /// [`GraphQLBuiltIn`](loc::SchemaDefLocation::GraphQLBuiltIn) location
    /// and are exempt from the `__` prefix restrictions.
    fn load_builtin_str(mut self, content: &str) -> Result<Self> {
        self.load_ast(None, content)?;
        Ok(self)
    }

    fn load_ast(&mut self, file_path: Option<&Path>, content: &str) -> Result<()> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| PathBuf::from("<graphql built-in>")),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }

        Ok(())
    }

    fn add_new_type(
        &mut self,
        file_path: Option<&Path>,
        position: graphql_parser::Pos,
        graphql_type: GraphQLType,
    ) -> Result<()> {
        let def_location = loc::SchemaDefLocation::from_pos(file_path, position);
        let type_name = graphql_type.name().to_string();

        if file_path.is_some() && type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location,
                type_name,
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: conflicting_type.def_location().clone(),
                def2: def_location,
            });
        }

        self.types.insert(type_name, graphql_type);
        Ok(())
    }

    fn inject_missing_builtin_directives(&mut self) -> Result<()> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(
                introspection::BUILTIN_DIRECTIVES_SDL,
            ).map_err(|err| SchemaBuildError::ParseError {
                file: PathBuf::from("<graphql built-in>"),
                err: err.to_string(),
            })?.into_static();

        for def in ast_doc.definitions {
            if let graphql_parser::schema::Definition::DirectiveDefinition(def) = def
                && !self.directive_defs.contains_key(def.name.as_str()) {
                self.directive_defs.insert(
                    def.name.to_string(),
                    Directive::from_ast(None, &def),
                );
            }
        }

        Ok(())
    }

    fn resolve_operation_type(
        &self,
        operation: GraphQLOperationType,
    ) -> Result<Option<String>> {
        let declared = match operation {
            GraphQLOperationType::Query => &self.query_type,
            GraphQLOperationType::Mutation => &self.mutation_type,
            GraphQLOperationType::Subscription => &self.subscription_type,
        };

        match declared {
            Some(typedef_loc) => match self.types.get(typedef_loc.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(typedef_loc.type_name.to_string())),
                _ => Err(SchemaBuildError::InvalidOperationType {
                    location: typedef_loc.def_location.clone(),
                    operation,
                    type_name: typedef_loc.type_name.to_string(),
                }),
            },

            None => {
                let type_name = operation.default_type_name();
                match self.types.get(type_name) {
                    Some(GraphQLType::Object(_)) => Ok(Some(type_name.to_string())),
                    _ => Ok(None),
                }
            },
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use graphql_parser::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.type_extensions.push((file_path.map(Path::to_path_buf), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = loc::SchemaDefLocation::from_pos(file_path, def.position);

        if file_path.is_some() {
            if builtin_directive_names().contains(def.name.as_str()) {
                return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                    directive_name: def.name,
                    location: def_location,
                });
            }

            if def.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                    def_location,
                    directive_name: def.name,
                });
            }
        }

        if let Some(existing_def) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name,
                location1: existing_def.def_location().clone(),
                location2: def_location,
            });
        }

        let directive = Directive::from_ast(file_path, &def);
        check_parameter_names(file_path, def.name.as_str(), directive.parameters())?;
        self.directive_defs.insert(def.name, directive);

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let declared_operations = [
            (GraphQLOperationType::Query, &schema_def.query),
            (GraphQLOperationType::Mutation, &schema_def.mutation),
            (GraphQLOperationType::Subscription, &schema_def.subscription),
        ];

        for (operation, type_name) in declared_operations {
            let Some(type_name) = type_name else {
                continue;
            };

            let typedef_loc = NamedTypeDefLocation {
                def_location: loc::SchemaDefLocation::from_pos(
                    file_path,
                    schema_def.position,
                ),
                type_name: type_name.to_string(),
            };
            let slot = match operation {
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        // As per spec:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let declared = [
            (GraphQLOperationType::Query, &self.query_type),
            (GraphQLOperationType::Mutation, &self.mutation_type),
            (GraphQLOperationType::Subscription, &self.subscription_type),
        ];
        for (idx, (operation1, typedef1)) in declared.iter().enumerate() {
            for (operation2, typedef2) in declared.iter().skip(idx + 1) {
                if let (Some(typedef1), Some(typedef2)) = (typedef1, typedef2)
                    && typedef1.type_name == typedef2.type_name {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: typedef1.type_name.to_owned(),
                        operation1: *operation1,
                        operation1_loc: typedef1.def_location.to_owned(),
                        operation2: *operation2,
                        operation2_loc: typedef2.def_location.to_owned(),
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use graphql_parser::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) => {
                let mut enum_type = EnumType::from_ast(file_path, &enum_def);
                add_enum_values(file_path, &mut enum_type, &enum_def.values)?;
                self.add_new_type(file_path, enum_def.position, GraphQLType::Enum(enum_type))
            },

            TypeDefinition::InputObject(inputobj_def) => {
                let mut inputobj_type = InputObjectType::from_ast(file_path, &inputobj_def);
                add_input_fields(file_path, &mut inputobj_type, &inputobj_def.fields)?;
                self.add_new_type(
                    file_path,
                    inputobj_def.position,
                    GraphQLType::InputObject(inputobj_type),
                )
            },

            TypeDefinition::Interface(iface_def) => {
                let mut data = ObjectOrInterfaceTypeData::from_ast_interface(
                    file_path,
                    &iface_def,
                );
                check_implements_declarations(&data)?;
                add_fields(file_path, &mut data, &iface_def.fields)?;
                self.add_new_type(
                    file_path,
                    iface_def.position,
                    GraphQLType::Interface(InterfaceType(data)),
                )
            },

            TypeDefinition::Object(obj_def) => {
                let mut data = ObjectOrInterfaceTypeData::from_ast_object(
                    file_path,
                    &obj_def,
                );
                check_implements_declarations(&data)?;
                add_fields(file_path, &mut data, &obj_def.fields)?;
                self.add_new_type(
                    file_path,
                    obj_def.position,
                    GraphQLType::Object(ObjectType(data)),
                )
            },

            TypeDefinition::Scalar(scalar_def) => {
                let scalar_type = ScalarType::from_ast(file_path, &scalar_def);
                self.add_new_type(file_path, scalar_def.position, GraphQLType::Scalar(scalar_type))
            },

            TypeDefinition::Union(union_def) => {
                let mut union_type = UnionType::from_ast(file_path, &union_def);
                add_union_members(&mut union_type, &union_def.types)?;
                self.add_new_type(file_path, union_def.position, GraphQLType::Union(union_type))
            },
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use graphql_parser::schema::TypeExtension;
        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Object(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Union(ext) => (ext.name.as_str(), ext.position),
        };
        let extension_loc = loc::SchemaDefLocation::from_pos(file_path, position);

        let Some(target_type) = self.types.get_mut(type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                extension_type_loc: extension_loc,
            });
        };

        match (target_type, &ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                add_enum_values(file_path, enum_type, &ext.values),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) =>
                add_input_fields(file_path, inputobj_type, &ext.fields),

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                iface_type.0.interfaces.extend(ext.implements_interfaces.iter().cloned());
                check_implements_declarations(&iface_type.0)?;
                add_fields(file_path, &mut iface_type.0, &ext.fields)
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                obj_type.0.interfaces.extend(ext.implements_interfaces.iter().cloned());
                check_implements_declarations(&obj_type.0)?;
                add_fields(file_path, &mut obj_type.0, &ext.fields)
            },

            // Scalar extensions can only add directives, which are not tracked.
            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => Ok(()),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                add_union_members(union_type, &ext.types),

            (target_type, _) => Err(SchemaBuildError::InvalidExtensionType {
                type_name: type_name.to_string(),
                schema_type_kind: target_type.kind(),
                extension_loc,
            }),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_enum_values(
    file_path: Option<&Path>,
    enum_type: &mut EnumType,
    values: &[ast::schema::EnumValue],
) -> Result<()> {
    for value in values {
        let enum_value = EnumValue::from_ast(file_path, enum_type.name(), value);

        // Error if this value is already defined.
        if let Some(existing_value) = enum_type.values.get(value.name.as_str()) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: enum_type.name().to_string(),
                value_name: value.name.to_string(),
                value_def1: existing_value.def_location().clone(),
                value_def2: enum_value.def_location().clone(),
            });
        }
        enum_type.values.insert(value.name.to_string(), enum_value);
    }
    Ok(())
}

fn add_fields(
    file_path: Option<&Path>,
    type_data: &mut ObjectOrInterfaceTypeData,
    fields: &[ast::schema::Field],
) -> Result<()> {
    for field in fields {
        let field_def = Field::from_ast(file_path, field);

        if file_path.is_some() && field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location: field_def.def_location().clone(),
                field_name: field.name.to_string(),
                type_name: type_data.name.to_string(),
            });
        }
        check_parameter_names(
            file_path,
            format!("{}.{}", type_data.name, field.name).as_str(),
            field_def.parameters(),
        )?;

        // Error if this field is already defined.
        if let Some(existing_field) = type_data.fields.get(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_data.name.to_string(),
                field_name: field.name.to_string(),
                field_def1: existing_field.def_location().clone(),
                field_def2: field_def.def_location().clone(),
            });
        }
        type_data.fields.insert(field.name.to_string(), field_def);
    }
    Ok(())
}

fn add_input_fields(
    file_path: Option<&Path>,
    inputobj_type: &mut InputObjectType,
    fields: &[ast::schema::InputValue],
) -> Result<()> {
    for field in fields {
        let input_field = InputField::from_ast(file_path, field);

        if file_path.is_some() && field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location: input_field.def_location().clone(),
                field_name: field.name.to_string(),
                type_name: inputobj_type.name().to_string(),
            });
        }

        if let Some(existing_field) = inputobj_type.fields.get(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: inputobj_type.name().to_string(),
                field_name: field.name.to_string(),
                field_def1: existing_field.def_location().clone(),
                field_def2: input_field.def_location().clone(),
            });
        }
        inputobj_type.fields.insert(field.name.to_string(), input_field);
    }
    Ok(())
}

fn add_union_members(union_type: &mut UnionType, members: &[String]) -> Result<()> {
    for member in members {
        if union_type.members.contains(member) {
            return Err(SchemaBuildError::DuplicatedUnionMember {
                location: union_type.def_location().clone(),
                member_name: member.to_string(),
                type_name: union_type.name().to_string(),
            });
        }
        union_type.members.push(member.to_string());
    }
    Ok(())
}

fn check_implements_declarations(type_data: &ObjectOrInterfaceTypeData) -> Result<()> {
    let mut seen = HashSet::new();
    for iface_name in type_data.interfaces.iter() {
        if !seen.insert(iface_name.as_str()) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                def_location: type_data.def_location.clone(),
                duplicated_interface_name: iface_name.to_string(),
                type_name: type_data.name.to_string(),
            });
        }

        if iface_name == &type_data.name {
            return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                def_location: type_data.def_location.clone(),
                interface_name: type_data.name.to_string(),
            });
        }
    }
    Ok(())
}

fn check_parameter_names(
    file_path: Option<&Path>,
    owner_name: &str,
    parameters: &IndexMap<String, Parameter>,
) -> Result<()> {
    if file_path.is_none() {
        return Ok(());
    }

    match parameters.values().find(|param| param.name().starts_with("__")) {
        Some(param) => Err(SchemaBuildError::InvalidDunderPrefixedParamName {
            def_location: param.def_location().clone(),
            owner_name: owner_name.to_string(),
            param_name: param.name().to_string(),
        }),
        None => Ok(()),
    }
}

fn validate_type_references(
    types: &IndexMap<String, GraphQLType>,
    directive_defs: &IndexMap<String, Directive>,
) -> Vec<TypeValidationError> {
    let mut errors = vec![];

    let check_param = |owner_name: &str, param: &Parameter, errors: &mut Vec<_>| {
        if let Some(param_type) = lookup_annotated(types, param.type_annotation(), param.def_location(), errors)
            && !param_type.is_input_type() {
            errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                def_location: param.def_location().clone(),
                owner_name: owner_name.to_string(),
                outputonly_type_name: param_type.name().to_string(),
                parameter_name: param.name().to_string(),
            });
        }
    };

    for graphql_type in types.values() {
        match graphql_type {
            GraphQLType::Interface(InterfaceType(type_data))
                | GraphQLType::Object(ObjectType(type_data)) => {
                for iface_name in type_data.interfaces.iter() {
                    match types.get(iface_name.as_str()) {
                        Some(GraphQLType::Interface(_)) => (),
                        Some(_) => errors.push(TypeValidationError::ImplementsNonInterfaceType {
                            loc: type_data.def_location.clone(),
                            non_interface_type_name: iface_name.to_string(),
                            type_name: type_data.name.to_string(),
                        }),
                        None => errors.push(TypeValidationError::UndefinedTypeName {
                            ref_location: type_data.def_location.clone(),
                            undefined_type_name: iface_name.to_string(),
                        }),
                    }
                }

                for field in type_data.fields.values() {
                    let field_type = lookup_annotated(
                        types,
                        field.type_annotation(),
                        field.def_location(),
                        &mut errors,
                    );
                    if let Some(GraphQLType::InputObject(inputobj_type)) = field_type {
                        errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                            def_location: field.def_location().clone(),
                            field_name: field.name().to_string(),
                            input_type_name: inputobj_type.name().to_string(),
                            parent_type_name: type_data.name.to_string(),
                        });
                    }

                    let owner_name = format!("{}.{}", type_data.name, field.name());
                    for param in field.parameters().values() {
                        check_param(owner_name.as_str(), param, &mut errors);
                    }
                }
            },

            GraphQLType::InputObject(inputobj_type) => {
                for field in inputobj_type.fields().values() {
                    let field_type = lookup_annotated(
                        types,
                        field.type_annotation(),
                        field.def_location(),
                        &mut errors,
                    );
                    if let Some(field_type) = field_type
                        && !field_type.is_input_type() {
                        errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                            def_location: field.def_location().clone(),
                            field_name: field.name().to_string(),
                            invalid_type_name: field_type.name().to_string(),
                            parent_type_name: inputobj_type.name().to_string(),
                        });
                    }
                }
            },

            GraphQLType::Union(union_type) => {
                for member_name in union_type.member_names() {
                    match types.get(member_name.as_str()) {
                        Some(GraphQLType::Object(_)) => (),
                        Some(member_type) => errors.push(
                            TypeValidationError::InvalidUnionMemberTypeKind {
                                location: union_type.def_location().clone(),
                                member_type_kind: member_type.kind(),
                                member_type_name: member_name.to_string(),
                                union_type_name: union_type.name().to_string(),
                            },
                        ),
                        None => errors.push(TypeValidationError::UndefinedTypeName {
                            ref_location: union_type.def_location().clone(),
                            undefined_type_name: member_name.to_string(),
                        }),
                    }
                }
            },

            GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => (),
        }
    }

    for directive in directive_defs.values() {
        let owner_name = format!("@{}", directive.name());
        for param in directive.parameters().values() {
            check_param(owner_name.as_str(), param, &mut errors);
        }
    }

    errors
}

fn lookup_annotated<'a>(
    types: &'a IndexMap<String, GraphQLType>,
    annotation: &TypeAnnotation,
    ref_location: &loc::SchemaDefLocation,
    errors: &mut Vec<TypeValidationError>,
) -> Option<&'a GraphQLType> {
    let type_name = annotation.innermost_named_type_annotation().graphql_type_name();
    let found = types.get(type_name);
    if found.is_none() {
        errors.push(TypeValidationError::UndefinedTypeName {
            ref_location: ref_location.clone(),
            undefined_type_name: type_name.to_string(),
        });
    }
    found
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::SchemaDefLocation,
        value_def2: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SchemaDefLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple definitions of the {operation:?} operation type were defined")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        location: loc::SchemaDefLocation,
        member_name: String,
        type_name: String,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend the `{type_name}` type with an extension for a \
        different kind of type (`{type_name}` is a {} type)",
        schema_type_kind.name(),
    )]
    InvalidExtensionType {
        type_name: String,
        schema_type_kind: GraphQLTypeKind,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Custom directive names must not start with `__`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SchemaDefLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`: `{param_name}` on `{owner_name}`")]
    InvalidDunderPrefixedParamName {
        def_location: loc::SchemaDefLocation,
        owner_name: String,
        param_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "The {operation:?} root operation type is declared as `{type_name}`, \
        which is not a defined object type"
    )]
    InvalidOperationType {
        location: loc::SchemaDefLocation,
        operation: GraphQLOperationType,
        type_name: String,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SchemaDefLocation,
        interface_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1:?} and {operation2:?} root operation are defined with \
        the same GraphQL type, but this is not allowed in GraphQL. All root \
        operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: GraphQLOperationType,
        operation1_loc: loc::SchemaDefLocation,
        operation2: GraphQLOperationType,
        operation2_loc: loc::SchemaDefLocation,
    },

    #[error("Error parsing schema source `{}`: {err}", .file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Failure while trying to read a schema file from disk")]
    SchemaFileReadError(#[source] Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

/// Represents the location of the declaration that named a given type as a
/// root operation type.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
