use web2native_rn::registry::default_native_registry;
use web2native_rn::transform::reformat::reformat;
use web2native_rn::{ConvertError, convert, convert_with_registry};

#[test]
fn every_mapped_element_is_rewritten() {
    let registry = default_native_registry();
    for mapping in &registry.elements {
        let input = format!("<{web}>x</{web}>", web = mapping.web);
        let out = convert(&input).expect("convert should succeed");
        assert!(
            out.contains(&format!("<{}>", mapping.native)),
            "expected <{}> for <{}>, got:\n{}",
            mapping.native,
            mapping.web,
            out
        );
        assert!(
            out.contains(&format!("</{}>", mapping.native)),
            "expected </{}> for <{}>, got:\n{}",
            mapping.native,
            mapping.web,
            out
        );
    }
}

#[test]
fn unmapped_elements_pass_through() {
    let out = convert("<video controls>x</video>").expect("convert should succeed");
    assert!(out.contains("<video controls>"));
    assert!(out.contains("</video>"));
}

#[test]
fn empty_and_blank_input_fail() {
    assert_eq!(convert(""), Err(ConvertError::EmptyInput));
    assert_eq!(convert("   "), Err(ConvertError::EmptyInput));
}

#[test]
fn style_string_becomes_style_object() {
    let out = convert("<div style=\"background-color: red; padding: 4px;\">x</div>")
        .expect("convert should succeed");

    assert!(out.contains("backgroundColor: 'red'"));
    assert!(out.contains("padding: '4px'"));
    assert!(out.contains("style={{"));
    // The original textual attribute is gone.
    assert!(!out.contains("style=\"background-color"));

    insta::assert_snapshot!(out, @r#"
import { View, Text, TouchableOpacity, TextInput, Image } from 'react-native';
<View style={{backgroundColor: 'red', padding: '4px'}}>
  x
</View>
"#);
}

#[test]
fn only_first_style_attribute_is_converted() {
    let out = convert("<div style=\"color: red\"><div style=\"color: blue\">x</div></div>")
        .expect("convert should succeed");

    assert!(out.contains("style={{color: 'red'}}"));
    // The second style attribute stays literal text.
    assert!(out.contains("style=\"color: blue\""));
}

#[test]
fn on_click_renamed_everywhere() {
    let out = convert("<div onClick={a}><span onClick={b}>x</span></div>")
        .expect("convert should succeed");
    assert!(!out.contains("onClick"));
    assert_eq!(out.matches("onPress").count(), 2);
}

#[test]
fn reformatting_its_own_output_is_stable() {
    let out = convert("<div><p>hi</p><img src={x} /></div>").expect("convert should succeed");
    let again = reformat(&out);

    let lines: Vec<&str> = out.lines().map(str::trim).collect();
    let lines_again: Vec<&str> = again.lines().map(str::trim).collect();
    assert_eq!(lines, lines_again);
    // Exact indentation already matches on the first pass for balanced input.
    assert_eq!(out, again);
}

#[test]
fn round_trip_button() {
    let out = convert("<button onClick={fn} className=\"x\">Go</button>")
        .expect("convert should succeed");

    insta::assert_snapshot!(out, @r#"
import { View, Text, TouchableOpacity, TextInput, Image } from 'react-native';
<TouchableOpacity onPress={fn} style="x">
  Go
</TouchableOpacity>
"#);
}

#[test]
fn list_markup_flattens_to_views() {
    let out = convert("<ul className=\"list\"><li>One</li><li>Two</li></ul>")
        .expect("convert should succeed");

    insta::assert_snapshot!(out, @r#"
import { View, Text, TouchableOpacity, TextInput, Image } from 'react-native';
<View style="list">
  <View>
    One
  </View>
  <View>
    Two
  </View>
</View>
"#);
}

#[test]
fn custom_registry_changes_header_and_mappings() {
    let mut registry = default_native_registry();
    registry.import_components = vec!["View".to_string()];
    let out = convert_with_registry("<div>x</div>", &registry).expect("convert should succeed");
    assert_eq!(
        out.lines().next().unwrap(),
        "import { View } from 'react-native';"
    );
    assert!(out.contains("<View>"));
}

#[test]
fn malformed_markup_converts_best_effort() {
    // An unclosed tag is not an error; substitutions still apply.
    let out = convert("<div><p>dangling").expect("convert should succeed");
    assert!(out.contains("<View>"));
    assert!(out.contains("<Text>"));
    assert!(out.contains("dangling"));
}
