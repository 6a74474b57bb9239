use proptest::prelude::*;
use xmllex::{Node, Prolog, XmlDoc};

const ELEMENT_NAMES: &[&str] = &["a", "b", "c", "d", "größe"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const UNKNOWN_BODIES: &[&str] = &["?pi data?", "!DOCTYPE x", "?empty?"];

#[derive(Debug, Clone)]
enum Tree {
    Element(String, Vec<(String, String)>, Vec<Tree>),
    Empty(String, Vec<(String, String)>),
    Content(String),
    Comment(String),
    Cdata(String),
    Unknown(String),
}

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (prop::sample::select(ATTRIBUTE_NAMES), any::<String>())
            .prop_map(|(name, value)| (name.to_string(), value)),
        0..3,
    )
}

// comments, CDATA sections and unknown constructs
fn arb_misc() -> impl Strategy<Value = Tree> {
    prop_oneof![
        "[^-]*".prop_map(Tree::Comment),
        "[^\\]]*".prop_map(Tree::Cdata),
        prop::sample::select(UNKNOWN_BODIES).prop_map(|body| Tree::Unknown(body.to_string())),
    ]
}

fn arb_tree() -> impl Strategy<Value = Tree> {
    let leaf = prop_oneof![
        any::<String>().prop_map(Tree::Content),
        arb_misc(),
        (prop::sample::select(ELEMENT_NAMES), arb_attributes())
            .prop_map(|(name, attributes)| Tree::Empty(name.to_string(), attributes)),
    ];
    leaf.prop_recursive(6, 128, 8, |inner| {
        (
            prop::sample::select(ELEMENT_NAMES),
            arb_attributes(),
            prop::collection::vec(inner, 0..8),
        )
            .prop_map(|(name, attributes, children)| {
                Tree::Element(name.to_string(), attributes, children)
            })
    })
}

fn arb_root() -> impl Strategy<Value = Tree> {
    (
        prop::sample::select(ELEMENT_NAMES),
        arb_attributes(),
        prop::collection::vec(arb_tree(), 0..8),
    )
        .prop_map(|(name, attributes, children)| Tree::Element(name.to_string(), attributes, children))
}

fn arb_prolog() -> impl Strategy<Value = Prolog> {
    (any::<bool>(), prop::collection::vec(arb_misc(), 0..4)).prop_map(|(declared, items)| {
        let mut prolog = if declared {
            Prolog::with_version("1.0")
        } else {
            Prolog::default()
        };
        for item in items {
            match item {
                Tree::Comment(body) => prolog.add_comment(body),
                Tree::Cdata(body) => prolog.add_cdata(body),
                Tree::Unknown(body) => prolog.add_unknown(body),
                _ => {}
            }
        }
        prolog
    })
}

fn build(doc: &mut XmlDoc, tree: &Tree) -> Node {
    match tree {
        Tree::Element(name, attributes, children) => {
            let node = doc.new_element(name);
            for (name, value) in attributes {
                doc.add_attr(node, name, value).unwrap();
            }
            for child in children {
                let child = build(doc, child);
                doc.give_birth(node, child).unwrap();
            }
            node
        }
        Tree::Empty(name, attributes) => {
            let node = doc.new_empty_element(name);
            for (name, value) in attributes {
                doc.add_attr(node, name, value).unwrap();
            }
            node
        }
        Tree::Content(text) => doc.new_content(text),
        Tree::Comment(body) => doc.new_comment(body),
        Tree::Cdata(body) => doc.new_cdata(body),
        Tree::Unknown(body) => doc.new_unknown(body),
    }
}

proptest! {
    #[test]
    fn test_serialized_tree_scans(tree in arb_root(), prolog in arb_prolog()) {
        let items = prolog.misc().len();
        let mut doc = XmlDoc::with_root(prolog, "placeholder");
        let root = build(&mut doc, &tree);
        let placeholder = doc.root().unwrap();
        doc.remove(placeholder);
        doc.set_root(root).unwrap();

        let xml = doc.to_xml();
        let scanned = XmlDoc::parse(&xml);
        prop_assert!(scanned.is_ok(), "cannot scan {:?}: {:?}", xml, scanned.err_desc());
        prop_assert_eq!(scanned.prolog().misc().len(), items);

        // a scanned document serializes to a fixed point
        let normalized = scanned.to_xml();
        let rescanned = XmlDoc::parse(&normalized);
        prop_assert!(rescanned.is_ok());
        prop_assert_eq!(rescanned.to_xml(), normalized);
    }

    #[test]
    fn test_clone_serializes_identically(tree in arb_root()) {
        let mut doc = XmlDoc::new();
        let root = build(&mut doc, &tree);
        let copy = doc.clone_node(root);
        prop_assert_eq!(doc.node_to_xml(copy, 0), doc.node_to_xml(root, 0));
    }

    #[test]
    fn test_indexes_contiguous_after_detach(
        tree in arb_root(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..5)
    ) {
        let mut doc = XmlDoc::new();
        let root = build(&mut doc, &tree);
        doc.set_root(root).unwrap();
        for pick in picks {
            let kids = doc.num_kids(root);
            if kids == 0 {
                break;
            }
            let victim = doc.child(root, pick.index(kids)).unwrap();
            doc.detach(victim);
            prop_assert_eq!(doc.num_kids(root), kids - 1);
            for (i, child) in doc.children(root).enumerate() {
                prop_assert_eq!(doc.index(child), i);
            }
        }
    }
}
