// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use script_components_engine::ContentNode;

#[allow(dead_code)]
pub fn generate_markdown_script(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("[[SECTION {section}]]\n\n"));
        content.push_str("An opening paragraph that introduces the product feature.\n\n");
        content.push_str("- Rapid heating\n- 3D Hot Air\n- Self-cleaning cavity\n\n");
        content.push_str("1. Open the door\n2. Slide in the tray\n\n");
        content.push_str("A closing line that mentions [[SECTION]] inline.\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_content_tree(sections: usize) -> ContentNode {
    let mut children = Vec::new();

    for section in 0..sections {
        children.push(ContentNode::paragraph(&format!("[[SECTION {section}]]")));
        children.push(ContentNode::paragraph(
            "An opening paragraph that introduces the product feature.",
        ));
        children.push(ContentNode::bullet_list(vec![
            ContentNode::list_item("Rapid heating"),
            ContentNode::list_item("3D Hot Air"),
            ContentNode::list_item("Self-cleaning cavity"),
        ]));
        children.push(ContentNode::paragraph(""));
    }

    ContentNode::doc(children)
}
