use crate::loc;
use crate::schema::GraphQLOperationType;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::test_utils::blog_schema;
use crate::test_utils::node_schema;
use crate::types::DirectiveLocation;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();

        assert!(matches!(
            schema,
            Err(SchemaBuildError::NoQueryOperationTypeDefined),
        ));
    }

    #[test]
    fn load_all_empty_operation_types_in_single_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation { m: Int }\n",
                "type Query { q: Int }\n",
                "type Subscription { s: Int }",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert_eq!(
            schema.subscription_type().map(|t| t.name()),
            Some("Subscription"),
        );

        Ok(())
    }

    #[test]
    fn mutation_and_subscription_types_are_optional() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { q: Int }")?
            .build()?;

        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn schema_block_overrides_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Root mutation: Change }\n",
                "type Root { q: Int }\n",
                "type Change { m: Int }\n",
                "type Query { unused: Int }",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "Root");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Change"));
        assert!(schema.is_query_type(schema.query_type()));
        assert!(!schema.is_query_type(schema.lookup_type("Query").unwrap()));

        Ok(())
    }

    #[test]
    fn types_map_preserves_definition_order() {
        let schema = blog_schema();
        let names = schema.all_types().keys().map(String::as_str).collect::<Vec<_>>();

        assert_eq!(&names[..5], &["Boolean", "Float", "ID", "Int", "String"]);
        assert_eq!(
            &names[5..13],
            &[
                "Query", "Test", "TestEnum", "TestInput", "Context", "Image",
                "Author", "Article",
            ],
        );
        assert!(names[13..].iter().all(|name| name.starts_with("__")));
    }

    #[test]
    fn introspection_types_are_always_present() {
        let schema = blog_schema();
        for type_name in [
            "__Schema", "__Type", "__Field", "__InputValue", "__EnumValue",
            "__Directive", "__TypeKind", "__DirectiveLocation",
        ] {
            let graphql_type = schema.lookup_type(type_name)
                .unwrap_or_else(|| panic!("missing `{type_name}`"));
            assert_eq!(graphql_type.def_location(), &loc::SchemaDefLocation::GraphQLBuiltIn);
        }

        let type_kind = schema.lookup_type("__TypeKind").unwrap();
        assert!(type_kind.enum_values().unwrap().contains_key("INPUT_OBJECT"));
    }

    #[test]
    fn meta_field_defs() {
        let schema = blog_schema();

        assert_eq!(schema.schema_meta_field_def().type_annotation().to_string(), "__Schema!");
        assert_eq!(schema.type_meta_field_def().type_annotation().to_string(), "__Type");
        assert_eq!(
            schema.type_meta_field_def().parameters().keys().collect::<Vec<_>>(),
            vec!["name"],
        );
        assert_eq!(schema.typename_meta_field_def().type_annotation().to_string(), "String!");
    }
}

mod fields {
    use super::*;

    #[test]
    fn field_descriptions_arguments_and_annotations() {
        let schema = blog_schema();
        let query_fields = schema.query_type().fields().unwrap();

        assert_eq!(
            query_fields.keys().collect::<Vec<_>>(),
            vec!["test", "article", "feed"],
        );

        let article = &query_fields["article"];
        assert_eq!(article.description(), Some("Blog article"));
        assert_eq!(article.type_annotation().to_string(), "Article");
        let id_param = &article.parameters()["id"];
        assert_eq!(id_param.type_annotation().to_string(), "ID!");
        assert!(id_param.is_required());

        let feed = &query_fields["feed"];
        assert_eq!(feed.type_annotation().to_string(), "[Article]");
        assert_eq!(
            feed.named_type(&schema).map(|t| t.name()),
            Some("Article"),
        );
        assert_eq!(
            feed.parameters()["context"].description(),
            Some("The context this feed will be shown in."),
        );
    }

    #[test]
    fn deprecated_fields_and_enum_values() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query {\n",
                "  old: Int @deprecated\n",
                "  older: Int @deprecated(reason: \"Use `new`.\")\n",
                "  new: Int\n",
                "}\n",
                "enum Color { RED @deprecated GREEN }",
            ))?
            .build()?;

        let fields = schema.query_type().fields().unwrap();
        assert_eq!(fields["old"].deprecation_state().reason(), Some("No longer supported"));
        assert_eq!(fields["older"].deprecation_state().reason(), Some("Use `new`."));
        assert!(!fields["new"].deprecation_state().is_deprecated());

        let color_values = schema.lookup_type("Color").unwrap().enum_values().unwrap();
        assert!(color_values["RED"].deprecation_state().is_deprecated());
        assert_eq!(color_values["GREEN"].enum_type_name(), "Color");

        Ok(())
    }

    #[test]
    fn default_values_make_parameters_optional() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { page(size: Int! = 10, after: String!): Int }")?
            .build()?;

        let params = schema.query_type().fields().unwrap()["page"].parameters();
        assert_eq!(params["size"].default_value(), Some("10"));
        assert!(!params["size"].is_required());
        assert!(params["after"].is_required());

        Ok(())
    }

    #[test]
    fn duplicate_field_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int a: String }")
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
                if field_name == "a",
        ));
    }

    #[test]
    fn dunder_prefixed_field_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { __secret: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedFieldName { .. }),
        ));
    }
}

mod types {
    use super::*;

    #[test]
    fn type_classification() {
        let schema = node_schema();

        let node = schema.lookup_type("Node").unwrap();
        assert!(node.is_abstract());
        assert!(node.is_composite());
        assert!(!node.is_input_type());

        let search = schema.lookup_type("SearchResult").unwrap();
        assert_eq!(search.kind(), GraphQLTypeKind::Union);
        assert!(search.is_abstract());

        let id = schema.lookup_type("ID").unwrap();
        assert!(id.is_leaf());
        assert!(id.is_input_type());
        assert!(!id.is_composite());
    }

    #[test]
    fn possible_types() {
        let schema = node_schema();
        let names_of = |type_name: &str| {
            schema.lookup_type(type_name)
                .unwrap()
                .possible_types(&schema)
                .into_iter()
                .map(GraphQLType::name)
                .collect::<Vec<_>>()
        };

        assert_eq!(names_of("Node"), vec!["A", "B"]);
        assert_eq!(names_of("SearchResult"), vec!["A", "C"]);
        assert_eq!(names_of("C"), vec!["C"]);
        assert!(names_of("ID").is_empty());
    }

    #[test]
    fn duplicate_type_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")
            .and_then(|builder| builder.load_str(None, "type Query { b: Int }"));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "Query",
        ));
    }

    #[test]
    fn redefining_a_builtin_scalar_is_an_error() {
        let result = SchemaBuilder::new().load_str(None, "scalar String");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: loc::SchemaDefLocation::GraphQLBuiltIn,
                ..
            }),
        ));
    }

    #[test]
    fn dunder_prefixed_type_is_an_error() {
        let result = SchemaBuilder::new().load_str(None, "type __Mine { a: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { .. }),
        ));
    }

    #[test]
    fn undefined_type_references_are_reported_together() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Missing b(arg: AlsoMissing): Int }")
            .and_then(SchemaBuilder::build);

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        let undefined_names = errors.iter().filter_map(|err| match err {
            TypeValidationError::UndefinedTypeName { undefined_type_name, .. } =>
                Some(undefined_type_name.as_str()),
            _ => None,
        }).collect::<Vec<_>>();
        assert_eq!(undefined_names, vec!["Missing", "AlsoMissing"]);
    }

    #[test]
    fn input_object_as_output_type_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "input In { a: Int } type Query { a: In }")
            .and_then(SchemaBuilder::build);

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::InvalidOutputFieldWithInputType { .. }],
        ));
    }

    #[test]
    fn non_object_union_member_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "union U = Int type Query { u: U }")
            .and_then(SchemaBuilder::build);

        let Err(SchemaBuildError::TypeValidationErrors { errors }) = result else {
            panic!("expected type validation errors");
        };
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::InvalidUnionMemberTypeKind { member_type_name, .. }]
                if member_type_name == "Int",
        ));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extensions_append_fields_and_values() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "extend type Query { b: Int }\n",
                "type Query { a: Int }\n",
                "enum Color { RED }\n",
                "extend enum Color { GREEN }\n",
                "input Filter { a: Int }\n",
                "extend input Filter { b: Int }\n",
                "type Extra { x: Int }\n",
                "union U = Extra\n",
                "extend union U = Query\n",
            ))?
            .build()?;

        assert_eq!(
            schema.query_type().fields().unwrap().keys().collect::<Vec<_>>(),
            vec!["a", "b"],
        );
        assert_eq!(
            schema.lookup_type("Color").unwrap().enum_values().unwrap().keys().collect::<Vec<_>>(),
            vec!["RED", "GREEN"],
        );
        assert_eq!(
            schema.lookup_type("Filter").unwrap().input_fields().unwrap().len(),
            2,
        );
        assert_eq!(
            schema.lookup_type("U").unwrap().as_union().unwrap().member_names(),
            &vec!["Extra".to_string(), "Query".to_string()],
        );

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int } extend type Missing { b: Int }")
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));
    }

    #[test]
    fn extension_of_wrong_kind() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int } enum E { A } extend type E { b: Int }")
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                schema_type_kind: GraphQLTypeKind::Enum,
                ..
            }),
        ));
    }
}

mod directives {
    use super::*;

    #[test]
    fn builtin_directives_are_injected() {
        let schema = blog_schema();
        let names = schema.all_directives().keys().map(String::as_str).collect::<Vec<_>>();

        assert_eq!(names, vec!["include", "skip", "deprecated", "specifiedBy"]);
        assert!(schema.all_directives().values().all(|d| d.is_builtin()));

        let skip = schema.lookup_directive("skip").unwrap();
        assert!(skip.on_field());
        assert!(skip.on_fragment());
        assert!(!skip.on_operation());
        assert!(skip.parameters()["if"].is_required());

        let deprecated = schema.lookup_directive("deprecated").unwrap();
        assert!(!deprecated.on_field());
        assert!(deprecated.locations().contains(&DirectiveLocation::EnumValue));
    }

    #[test]
    fn custom_directive_applicability_flags() {
        let schema = node_schema();

        let cached = schema.lookup_directive("cached").unwrap();
        assert!(cached.on_field());
        assert!(cached.on_operation());
        assert!(!cached.on_fragment());
        assert_eq!(cached.parameters()["ttl"].default_value(), Some("60"));

        let trace = schema.lookup_directive("trace").unwrap();
        assert!(!trace.on_field());
        assert!(trace.on_fragment());
        assert!(!trace.is_builtin());
    }

    #[test]
    fn redefinition_of_builtin_directive() {
        let result = SchemaBuilder::new()
            .load_str(None, "directive @skip(if: Boolean!) on FIELD");

        assert!(matches!(
            result,
            Err(SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name, .. })
                if directive_name == "skip",
        ));
    }

    #[test]
    fn duplicate_custom_directive() {
        let result = SchemaBuilder::new()
            .load_str(None, "directive @a on FIELD directive @a on QUERY");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateDirectiveDefinition { .. }),
        ));
    }
}

mod operations {
    use super::*;

    #[test]
    fn root_types_must_be_unique() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Q mutation: Q } type Q { a: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::NonUniqueOperationTypes {
                operation1: GraphQLOperationType::Query,
                operation2: GraphQLOperationType::Mutation,
                ..
            }),
        ));
    }

    #[test]
    fn declared_root_type_must_be_an_object() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Q } scalar Q")
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidOperationType {
                operation: GraphQLOperationType::Query,
                ..
            }),
        ));
    }

    #[test]
    fn load_file_reports_missing_files() {
        let result = SchemaBuilder::new().load_file("/definitely/not/a/schema.graphql");

        assert!(matches!(result, Err(SchemaBuildError::SchemaFileReadError(_))));
    }

    #[test]
    fn parse_errors_name_the_source() {
        let result = SchemaBuilder::new()
            .load_str(Some("broken.graphql".into()), "type Query {");

        let Err(SchemaBuildError::ParseError { file, .. }) = result else {
            panic!("expected a parse error");
        };
        assert_eq!(file.to_str(), Some("broken.graphql"));
    }
}
