use yew::prelude::*;

/// Sets `document.title` while the calling page is mounted and restores the
/// previous title on unmount.
#[hook]
pub fn use_document_title(title: &'static str) {
    use_effect_with(title, |title| {
        let document = gloo_utils::document();
        let previous = document.title();
        document.set_title(title);
        move || document.set_title(&previous)
    });
}
