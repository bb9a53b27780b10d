use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const WIDGET_FILES: [&str; 5] =
    ["event.rs", "mod.rs", "model.rs", "reducer.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_widgets = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_widgets.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }

    let fs_widgets: BTreeSet<String> = sorted_entries(&widgets_dir)
        .into_iter()
        .filter(|path| path.is_dir())
        .map(|path| file_stem(&path))
        .collect();

    if declared_widgets != fs_widgets {
        violations.push(format!(
            "{}: declared widgets {:?} do not match directories {:?}",
            mod_rs.display(),
            declared_widgets,
            fs_widgets
        ));
    }

    for widget in &declared_widgets {
        validate_widget(&widgets_dir.join(widget), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget(widget_dir: &Path, violations: &mut Vec<String>) {
    for required in WIDGET_FILES {
        if !widget_dir.join(required).is_file() {
            violations.push(format!(
                "{}: missing {required}",
                widget_dir.display()
            ));
        }
    }

    let prefix = snake_to_pascal_case(&file_stem(widget_dir));
    let event_path = widget_dir.join("event.rs");
    if event_path.is_file() {
        let enums: BTreeSet<String> = parse(&event_path)
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
                _ => None,
            })
            .collect();
        for contract in [format!("{prefix}Event"), format!("{prefix}Effect")] {
            if !enums.contains(&contract) {
                violations.push(format!(
                    "{}: missing enum {contract}",
                    event_path.display()
                ));
            }
        }
    }

    let reducer_path = widget_dir.join("reducer.rs");
    if reducer_path.is_file() {
        let has_reduce = parse(&reducer_path).items.iter().any(|item| {
            matches!(
                item,
                Item::Fn(item_fn)
                    if item_fn.sig.ident == "reduce"
                        && is_pub_crate(&item_fn.vis)
            )
        });
        if !has_reduce {
            violations.push(format!(
                "{}: expected pub(crate) fn reduce",
                reducer_path.display()
            ));
        }
    }

    for path in sorted_entries(widget_dir) {
        if path.extension().is_some_and(|ext| ext == "rs") {
            validate_source(&path, violations);
        }
    }

    let view_dir = widget_dir.join("view");
    if !view_dir.is_dir() {
        violations.push(format!("{}: missing view/", widget_dir.display()));
        return;
    }
    for path in sorted_entries(&view_dir) {
        if path.extension().is_some_and(|ext| ext == "rs") {
            validate_source(&path, violations);
            if file_stem(&path) != "mod" {
                validate_view_file(&path, violations);
            }
        }
    }
}

fn validate_source(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);
    for forbidden in ["crate::app::", "crate::routers::", "std::fs::"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: widgets must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }

    for item in &parse(file_path).items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            }
        }
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);
    for forbidden in ["log::", "tokio::", "Task::", "iced::Task"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern in view: {forbidden}",
                file_path.display()
            ));
        }
    }

    let expected_prefix = snake_to_pascal_case(&file_stem(file_path));
    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &parse(file_path).items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with file prefix '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

fn read(file_path: &Path) -> String {
    fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    })
}

fn parse(file_path: &Path) -> syn::File {
    syn::parse_file(&read(file_path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    })
}

fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
