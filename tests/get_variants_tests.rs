//! Compile-time checks of the `GetVariants` extractor. Most assertions here
//! are type equalities; a wrong extraction fails to build.

use tailwindest::{
    create_tools, style, variant_key, variant_selection, DynSelection, GetVariants, NoVariants,
    Group, Rotary, Style, Styled, VariantSelection, Variants,
};

variant_key! {
    enum Size { Sm => "sm", Md => "md", Lg => "lg" }
}

variant_key! {
    enum Color { Red => "red", Blue => "blue" }
}

variant_selection! {
    struct ButtonVariants { size: Size => SIZE, color: Color => COLOR }
}

trait Same<T> {}
impl<T> Same<T> for T {}

fn assert_same<A: Same<B>, B>() {}

fn variants_of<R: tailwindest::HasVariants>(_: &R) -> std::marker::PhantomData<GetVariants<R>> {
    std::marker::PhantomData
}

fn same_type<T>(_: std::marker::PhantomData<T>, _: std::marker::PhantomData<T>) {}

#[test]
fn test_rotary_extraction_survives_compose() {
    let tw = create_tools();
    let rotary = tw.rotary(
        style! { "padding" => "p-2" },
        [(Size::Sm, style! { "padding" => "p-1" })],
    );
    let composed = rotary
        .compose([style! { "margin" => "m-1" }])
        .compose([style! { "margin" => "m-2" }, style! { "display" => "flex" }]);

    assert_same::<GetVariants<Rotary<Size>>, Size>();
    same_type(variants_of(&rotary), variants_of(&composed));
    same_type(variants_of(&composed), std::marker::PhantomData::<Size>);
}

#[test]
fn test_toggle_extracts_bool() {
    let toggle = create_tools().toggle(
        Style::new(),
        style! { "opacity" => "opacity-100" },
        style! { "opacity" => "opacity-50" },
    );
    same_type(variants_of(&toggle), std::marker::PhantomData::<bool>);
}

#[test]
fn test_grouped_extraction_is_complete() {
    let tw = create_tools();
    let button = tw
        .variants::<ButtonVariants>(style! { "display" => "flex" })
        .group(ButtonVariants::SIZE, Size::ALL.iter().map(|s| (*s, Style::new())))
        .group(ButtonVariants::COLOR, Color::ALL.iter().map(|c| (*c, Style::new())));

    assert_same::<GetVariants<Variants<ButtonVariants>>, ButtonVariants>();
    same_type(variants_of(&button), variants_of(&button.compose([Style::new()])));

    // every group optional, each typed by its key enum
    let selection: GetVariants<Variants<ButtonVariants>> = ButtonVariants {
        size: None::<Size>,
        color: Some(Color::Blue),
    };
    assert_eq!(selection.choice("size"), None);
    assert_eq!(selection.choice("color"), Some("blue"));
    assert_eq!(ButtonVariants::GROUPS, &["size", "color"]);
    assert_eq!(Size::ALL.len(), 3);
    assert_eq!(Color::ALL.len(), 2);
}

#[test]
fn test_group_handles_carry_group_key_types() {
    fn handle_of<S, K>(_: Group<S, K>) -> std::marker::PhantomData<(S, K)> {
        std::marker::PhantomData
    }

    same_type(
        handle_of(ButtonVariants::SIZE),
        std::marker::PhantomData::<(ButtonVariants, Size)>,
    );
    same_type(
        handle_of(ButtonVariants::COLOR),
        std::marker::PhantomData::<(ButtonVariants, Color)>,
    );
    assert_eq!(ButtonVariants::SIZE.name(), "size");
    assert_eq!(ButtonVariants::COLOR.name(), "color");
}

#[test]
fn test_style_only_extracts_nothing() {
    assert_same::<GetVariants<Styled>, NoVariants>();
    assert_same::<GetVariants<Style>, NoVariants>();

    // uninhabited: a function taking it can never be called
    fn absurd(never: GetVariants<Styled>) -> ! {
        match never {}
    }
    let _: fn(NoVariants) -> ! = absurd;
}

#[test]
fn test_dynamic_components_extract_string_selection() {
    assert_same::<GetVariants<Variants<DynSelection>>, DynSelection>();
    assert_same::<GetVariants<Rotary<String>>, String>();
}
