use tailwindest::{create_tools, style, variant_key, variant_selection, Style, Tools};

variant_key! {
    enum Size { Sm => "sm", Md => "md", Lg => "lg" }
}

variant_key! {
    enum Color { Red => "red", Blue => "blue" }
}

variant_selection! {
    struct ButtonVariants { size: Size => SIZE, color: Color => COLOR }
}

fn padding_rotary(tw: &Tools) -> tailwindest::Rotary<Size> {
    tw.rotary(
        style! { "padding" => "p-2" },
        [
            (Size::Sm, style! { "padding" => "p-1" }),
            (Size::Lg, style! { "padding" => "p-4" }),
        ],
    )
}

#[test]
fn test_worked_rotary_example() {
    let tw = create_tools();
    let rotary = padding_rotary(&tw);

    assert_eq!(rotary.pick(&Size::Sm), style! { "padding" => "p-1" });

    let composed = rotary.compose([style! { "margin" => "m-1" }]);
    assert_eq!(
        composed.pick(&Size::Lg),
        style! { "padding" => "p-4", "margin" => "m-1" }
    );
}

#[test]
fn test_worked_example_from_string_map() {
    let defs = tailwindest::Definitions::from_yaml_str(
        r#"
components:
  padding:
    kind: rotary
    variants:
      base: { padding: p-2 }
      sm: { padding: p-1 }
      lg: { padding: p-4 }
"#,
    )
    .unwrap();

    let tailwindest::Component::Rotary(rotary) = defs.component("padding").unwrap() else {
        panic!("expected a rotary component");
    };
    assert_eq!(rotary.pick(&"sm".to_string()), style! { "padding" => "p-1" });
    let composed = rotary.compose([style! { "margin" => "m-1" }]);
    assert_eq!(composed.class(&"lg".to_string()), "p-4 m-1");
}

#[test]
fn test_merge_priority() {
    let cases = [
        (
            style! { "padding" => "p-2", "margin" => "m-1" },
            style! { "padding" => "p-4" },
        ),
        (style! {}, style! { "display" => "flex" }),
        (style! { "display" => "grid" }, style! {}),
        (
            style! { ":hover" => { "padding" => "p-1" }, "color" => "text-red-500" },
            style! { ":hover" => { "margin" => "m-1" } },
        ),
    ];

    for (a, b) in cases {
        let merged = create_tools().style(a.clone()).compose([b.clone()]);
        let merged = merged.style();
        for property in a.properties().chain(b.properties()) {
            let expected = b.get(property).or_else(|| a.get(property));
            assert_eq!(merged.get(property), expected, "property {}", property);
        }
        assert_eq!(merged.len(), a.merge(&b).len());
    }
}

#[test]
fn test_nested_block_is_replaced_whole() {
    let merged = style! { ":hover" => { "padding" => "p-1" } }
        .merge(&style! { ":hover" => { "margin" => "m-1" } });
    assert_eq!(merged.class(), "hover:m-1");
}

#[test]
fn test_variant_isolation() {
    let tw = create_tools();
    let base = style! { "padding" => "p-2", "display" => "flex", "color" => "text-slate-900" };
    let sm = style! { "padding" => "p-1", "fontSize" => "text-sm" };
    let rotary = tw.rotary(
        base.clone(),
        [(Size::Sm, sm.clone()), (Size::Lg, style! { "margin" => "m-4" })],
    );

    let picked = rotary.pick(&Size::Sm);
    for (property, value) in base.iter() {
        if !sm.contains(property) {
            assert_eq!(picked.get(property), Some(value));
        }
    }
    for (property, value) in sm.iter() {
        assert_eq!(picked.get(property), Some(value));
    }
    assert!(!picked.contains("margin"));
}

#[test]
fn test_grouped_independence() {
    let tw = create_tools();
    let button = tw
        .variants::<ButtonVariants>(style! { "display" => "inline-flex" })
        .group(
            ButtonVariants::SIZE,
            [
                (Size::Sm, style! { "padding" => "p-1" }),
                (Size::Md, style! { "padding" => "p-2" }),
                (Size::Lg, style! { "padding" => "p-4" }),
            ],
        )
        .group(
            ButtonVariants::COLOR,
            [
                (
                    Color::Red,
                    style! { "backgroundColor" => "bg-red-500", "borderColor" => "border-red-700" },
                ),
                (Color::Blue, style! { "backgroundColor" => "bg-blue-500" }),
            ],
        );

    for size in Size::ALL {
        let style = button.resolve(&ButtonVariants::default().size(*size));
        assert!(!style.contains("backgroundColor"));
        assert!(!style.contains("borderColor"));
        assert_eq!(style.class_of("display"), Some("inline-flex"));
    }

    let both = button.resolve(&ButtonVariants::default().size(Size::Lg).color(Color::Red));
    assert_eq!(both.class(), "inline-flex p-4 bg-red-500 border-red-700");
}

#[test]
fn test_omitted_groups_resolve_to_base() {
    let tw = create_tools();
    let button = tw
        .variants::<ButtonVariants>(style! { "display" => "flex" })
        .group(ButtonVariants::SIZE, [(Size::Sm, style! { "padding" => "p-1" })]);

    assert_eq!(button.resolve(&ButtonVariants::default()), style! { "display" => "flex" });
    // declared enum value without a style in this builder
    assert_eq!(
        button.resolve(&ButtonVariants::default().size(Size::Lg)),
        style! { "display" => "flex" }
    );
}

#[test]
fn test_selected_group_reaches_resolution() {
    let tw = create_tools();
    let button = tw
        .variants::<ButtonVariants>(style! { "display" => "flex" })
        .group(ButtonVariants::SIZE, [(Size::Lg, style! { "padding" => "p-4" })])
        .group(
            ButtonVariants::COLOR,
            [(Color::Red, style! { "backgroundColor" => "bg-red-500" })],
        );

    assert_eq!(button.groups().collect::<Vec<_>>(), ButtonVariants::GROUPS);
    assert_eq!(button.class(&ButtonVariants::default().size(Size::Lg)), "flex p-4");
    assert_eq!(
        button.class(&ButtonVariants::default().color(Color::Red)),
        "flex bg-red-500"
    );
}

#[test]
fn test_compose_does_not_mutate_original() {
    let tw = create_tools();
    let card = tw.style(style! { "padding" => "p-4" });
    let wide = card.compose([style! { "width" => "w-full" }, style! { "padding" => "p-8" }]);

    assert_eq!(card.class(), "p-4");
    assert_eq!(wide.class(), "p-8 w-full");
    assert_eq!(Style::from(wide), style! { "padding" => "p-8", "width" => "w-full" });
}

#[test]
fn test_toggle_and_merge_props() {
    let tw = create_tools();
    let switch = tw.toggle(
        style! { "borderRadius" => "rounded-full" },
        style! { "backgroundColor" => "bg-sky-500" },
        style! { "backgroundColor" => "bg-slate-200" },
    );
    assert_eq!(switch.class(&true), "rounded-full bg-sky-500");
    assert_eq!(switch.class(&false), "rounded-full bg-slate-200");

    let props = style! { "borderRadius" => "rounded-none" };
    assert_eq!(tw.merge_props(&switch.pick(&true), &props), "rounded-none bg-sky-500");
}

#[test]
fn test_builders_are_shareable() {
    fn assert_send_sync<T: Clone + Send + Sync>() {}

    assert_send_sync::<tailwindest::Styled>();
    assert_send_sync::<tailwindest::Rotary<Size>>();
    assert_send_sync::<tailwindest::Rotary<bool>>();
    assert_send_sync::<tailwindest::Variants<ButtonVariants>>();
    assert_send_sync::<tailwindest::Component>();
    assert_send_sync::<Tools>();
}
