use rstest::{fixture, rstest};
use xmllex::XmlDoc;

#[fixture]
fn family() -> XmlDoc {
    XmlDoc::parse("<grandma><mom><me/><sis>hi</sis></mom><aunt/></grandma>")
}

#[rstest]
#[case("/grandma/mom/me/../", "/grandma/mom")]
#[case("/grandma/mom/./me", "/grandma/mom/me")]
#[case("/grandma//aunt", "/grandma/aunt")]
#[case("mom/sis", "/grandma/mom/sis")]
#[case("/grandma/mom/me/../../aunt", "/grandma/aunt")]
#[case("/", "/grandma")]
#[case("", "/grandma")]
fn test_find_same(family: XmlDoc, #[case] path: &str, #[case] same_as: &str) {
    let found = family.find(path);
    assert!(found.is_some());
    assert_eq!(found, family.find(same_as));
}

#[rstest]
#[case("/grandpa")]
#[case("/grandma/dad")]
#[case("/grandma/mom/me/child")]
#[case("/grandma/..")]
#[case("grandma")]
fn test_find_missing(family: XmlDoc, #[case] path: &str) {
    assert_eq!(family.find(path), None);
}

#[rstest]
fn test_find_from(family: XmlDoc) {
    let me = family.find("/grandma/mom/me").unwrap();
    let sis = family.find_from(me, "../sis").unwrap();
    assert_eq!(family.body(sis), "hi");
    assert_eq!(family.find_from(me, "/grandma/aunt"), family.find("aunt"));
    assert_eq!(family.find_from(me, "."), Some(me));
}

#[rstest]
fn test_full_name(family: XmlDoc) {
    let names = family
        .descendants(family.root().unwrap())
        .filter(|node| family.is_element(*node) || family.is_empty_element(*node))
        .map(|node| family.full_name(node))
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "/grandma/",
            "/grandma/mom/",
            "/grandma/mom/me",
            "/grandma/mom/sis/",
            "/grandma/aunt"
        ]
    );
}

#[rstest]
fn test_navigation(family: XmlDoc) {
    let grandma = family.root().unwrap();
    let mom = family.first_child(grandma).unwrap();
    let aunt = family.last_child(grandma).unwrap();
    assert_eq!(family.next_sibling(mom), Some(aunt));
    assert_eq!(family.previous_sibling(aunt), Some(mom));
    assert_eq!(family.previous_sibling(mom), None);
    assert_eq!(family.find_child(grandma, "aunt"), Some(aunt));
    assert_eq!(family.find_child(grandma, "me"), None);

    let me = family.find("mom/me").unwrap();
    let ancestors = family
        .ancestors(me)
        .map(|node| family.name(node))
        .collect::<Vec<_>>();
    assert_eq!(ancestors, vec!["me", "mom", "grandma"]);
    assert_eq!(family.top(me), grandma);
}

#[test]
fn test_find_in_free_fragment() {
    let mut doc = XmlDoc::parse("<root/>");
    let branch = doc.new_element("branch");
    let leaf = doc.new_empty_element("leaf");
    doc.give_birth(branch, leaf).unwrap();
    assert_eq!(doc.find_from(leaf, "/branch/leaf"), Some(leaf));
    assert_eq!(doc.find_from(leaf, ".."), Some(branch));
    assert_eq!(doc.find("branch"), None);
}
