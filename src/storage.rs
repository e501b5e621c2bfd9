use crate::error::{Error, Result};
use crate::models::ChartSpec;
use crate::panel::PanelStack;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

// Keys that mark an object as a chart spec rather than a document.
const SPEC_KEYS: [&str; 5] = ["type", "records", "data", "categoryField", "valueField"];

/// Parse a chart document: a JSON array of specs, or `{ "charts": [...] }`.
/// A missing or `null` `charts` property is an empty list.
pub fn parse_specs(json: &str) -> Result<Vec<ChartSpec>> {
    let doc: serde_json::Value = serde_json::from_str(json)?;
    let list = match doc {
        serde_json::Value::Array(items) => serde_json::Value::Array(items),
        serde_json::Value::Object(mut obj) => match obj.remove("charts") {
            Some(serde_json::Value::Null) => return Ok(Vec::new()),
            None => {
                if SPEC_KEYS.iter().any(|k| obj.contains_key(*k)) {
                    log::warn!(
                        "document is a single chart object without `charts`; \
                         wrap it in an array or under `charts` to render it"
                    );
                } else {
                    log::warn!("document has no `charts` property; nothing to render");
                }
                return Ok(Vec::new());
            }
            Some(charts) => charts,
        },
        _ => return Err(Error::Shape),
    };
    Ok(serde_json::from_value(list)?)
}

/// Load chart specs from a file, or from stdin when the path is `-`.
pub fn load_specs<P: AsRef<Path>>(path: P) -> Result<Vec<ChartSpec>> {
    let path = path.as_ref();
    let mut text = String::new();
    if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        File::open(path)?.read_to_string(&mut text)?;
    }
    let specs = parse_specs(&text)?;
    log::debug!("loaded {} chart spec(s) from {}", specs.len(), path.display());
    Ok(specs)
}

/// Panel scene (drawing instructions) as pretty JSON; `null` when there is nothing to draw.
pub fn scene_json(stack: Option<&PanelStack>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&stack)?)
}

/// Save the panel scene as pretty JSON.
pub fn save_scene_json<P: AsRef<Path>>(stack: Option<&PanelStack>, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = scene_json(stack)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChartKind;
    use crate::panel::render_panels;
    use tempfile::tempdir;

    const ONE: &str = r#"{"type": "horizontal-bar", "title": "T", "records": [],
                          "categoryField": "k", "valueField": "v"}"#;

    #[test]
    fn accepts_array_and_wrapped_forms() {
        let bare = parse_specs(&format!("[{ONE}]")).unwrap();
        let wrapped = parse_specs(&format!(r#"{{"charts": [{ONE}]}}"#)).unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].kind, ChartKind::HorizontalBar);
        assert!(parse_specs(r#"{"charts": null}"#).unwrap().is_empty());
        assert!(parse_specs("{}").unwrap().is_empty());
    }

    #[test]
    fn bare_spec_object_is_not_a_document() {
        // a lone spec without `charts` yields no charts (and a warning)
        assert!(parse_specs(ONE).unwrap().is_empty());
        assert_eq!(parse_specs(&format!("[{ONE}]")).unwrap().len(), 1);
    }

    #[test]
    fn rejects_scalars_and_bad_specs() {
        assert!(matches!(parse_specs("42"), Err(Error::Shape)));
        assert!(matches!(parse_specs(r#"[{"title": "no type"}]"#), Err(Error::Json(_))));
        assert!(matches!(parse_specs("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn write_scene_and_reload_specs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("charts.json");
        std::fs::write(&input, format!("[{ONE}]")).unwrap();
        let specs = load_specs(&input).unwrap();

        let scene = dir.path().join("scene.json");
        save_scene_json(render_panels(&specs).as_ref(), &scene).unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&scene).unwrap()).unwrap();
        assert_eq!(v["panels"].as_array().unwrap().len(), 1);
        assert_eq!(v["panels"][0]["category_axis"]["position"], "left");
    }
}
