//! Name resolution through the public API: relationship targets and legacy
//! class locations.

use rstest::rstest;

use ormdoc::ast::{ManyToManyFields, OneToManyFields, TargetEntityNode};
use ormdoc::hir::{LegacyResolution, LegacyResolverOptions, TargetResolution};
use ormdoc::parser::StaticAnnotationReader;
use ormdoc::{
    AnnotationFields, DeclarationContext, KnownTypes, OrmTagParser, PseudoNamespaceResolver,
    RawAnnotationOccurrence, TagValueNode, TargetEntityResolver, TypeSet,
};

fn known(names: &[&str]) -> TypeSet {
    names.iter().copied().collect()
}

// ============================================================================
// TARGET ENTITIES
// ============================================================================

#[rstest]
#[case::declared_fqn(
    r"App\Entity\Tag",
    &[r"App\Entity\Tag"],
    TargetResolution::Declared(r"App\Entity\Tag".into())
)]
#[case::namespaced(
    "Tag",
    &[r"App\Entity\Tag"],
    TargetResolution::Namespaced(r"App\Entity\Tag".into())
)]
#[case::unresolved("Tag", &[], TargetResolution::Unresolved("Tag".into()))]
#[case::other_namespace("Tag", &[r"Blog\Entity\Tag"], TargetResolution::Unresolved("Tag".into()))]
fn test_target_entity_resolution(
    #[case] declared: &str,
    #[case] types: &[&str],
    #[case] expected: TargetResolution,
) {
    let types = known(types);
    let resolver = TargetEntityResolver::new(&types);

    assert_eq!(resolver.resolve_detailed(declared, r"App\Entity"), expected);
}

#[test]
fn test_closure_as_known_types() {
    let is_entity = |fqn: &str| fqn.starts_with(r"App\Entity\");
    assert!(is_entity.is_known(r"App\Entity\Post"));

    let resolver = TargetEntityResolver::new(&is_entity);
    assert_eq!(resolver.resolve("Post", r"App\Entity"), r"App\Entity\Post");
}

#[test]
fn test_parsed_relationship_keeps_declared_and_fqn() {
    let declaration = DeclarationContext::property("tags", r"App\Entity");
    let reader = StaticAnnotationReader::new().with(
        declaration.clone(),
        AnnotationFields::ManyToMany(ManyToManyFields {
            target_entity: "Tag".into(),
            inversed_by: Some("posts".into()),
            ..ManyToManyFields::default()
        }),
    );
    let types = known(&[r"App\Entity\Tag"]);
    let parser = OrmTagParser::new(&reader, &types);
    let occurrence = RawAnnotationOccurrence::new(
        r"@ORM\ManyToMany",
        r#"(targetEntity="Tag", inversedBy="posts")"#,
        &declaration,
    );

    let mut node = parser.parse(&occurrence).unwrap();
    assert_eq!(node.target_entity(), Some("Tag"));
    assert_eq!(node.fqn_target_entity(), Some(r"App\Entity\Tag"));

    // Dropping the inverse side removes it from the rendered text
    assert!(node.remove_inversed_by());
    assert_eq!(node.to_string(), r#"(targetEntity="Tag")"#);
    assert_eq!(node.render_tag("ORM"), r#"@ORM\ManyToMany(targetEntity="Tag")"#);
}

#[test]
fn test_remove_mapped_by_twice() {
    let declaration = DeclarationContext::property("comments", r"App\Entity");
    let reader = StaticAnnotationReader::new().with(
        declaration.clone(),
        AnnotationFields::OneToMany(OneToManyFields {
            target_entity: "Comment".into(),
            mapped_by: Some("post".into()),
            ..OneToManyFields::default()
        }),
    );
    let types = TypeSet::new();
    let parser = OrmTagParser::new(&reader, &types);
    let occurrence = RawAnnotationOccurrence::new(
        r"@ORM\OneToMany",
        r#"(mappedBy="post", targetEntity="Comment")"#,
        &declaration,
    );

    let mut node = parser.parse(&occurrence).unwrap();
    assert!(node.remove_mapped_by());
    assert!(node.remove_mapped_by());

    let TagValueNode::OneToMany(tag) = &node else {
        panic!("expected OneToMany, got {node:?}");
    };
    assert_eq!(tag.fqn_target_entity(), "Comment");
    assert_eq!(tag.to_string(), r#"(targetEntity="Comment")"#);
}

// ============================================================================
// LEGACY CLASSES
// ============================================================================

#[rstest]
#[case::renamed("Model", "AppModel", LegacyResolution::Renamed(r"App\Model\AppModel".into()))]
#[case::renamed_framework(
    "Utility",
    "Inflector",
    LegacyResolution::Renamed(r"Cake\Utility\Inflector".into())
)]
#[case::application(
    "Controller/Component",
    "PaginatorComponent",
    LegacyResolution::Application(r"App\Controller\Component\PaginatorComponent".into())
)]
#[case::framework(
    "Controller/Component",
    "AuthComponent",
    LegacyResolution::Framework(r"Cake\Controller\Component\AuthComponent".into())
)]
#[case::plugin(
    "Plugin/Blog/Model",
    "Article",
    LegacyResolution::Unchanged(r"Plugin\Blog\Model\Article".into())
)]
#[case::single_segment("Vendor", "Parser", LegacyResolution::Unchanged(r"Vendor\Parser".into()))]
#[case::interior_lib(
    "Network/Lib/Email",
    "CakeEmail",
    LegacyResolution::Application(r"App\Network\Email\CakeEmail".into())
)]
fn test_legacy_resolution(
    #[case] location: &str,
    #[case] class: &str,
    #[case] expected: LegacyResolution,
) {
    let types = known(&[r"Cake\Controller\Component\AuthComponent"]);
    let resolver = PseudoNamespaceResolver::new(&types);

    assert_eq!(resolver.resolve_detailed(location, class), expected);
}

#[test]
fn test_legacy_framework_namespace_option() {
    let types = known(&[r"Legacy\Utility\Sanitize"]);
    let options = LegacyResolverOptions::default().with_framework_namespace("Legacy");
    let resolver = PseudoNamespaceResolver::with_options(&types, options);

    assert_eq!(resolver.resolve("Utility", "Sanitize"), r"Legacy\Utility\Sanitize");
}
