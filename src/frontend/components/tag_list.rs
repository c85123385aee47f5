use leptos::prelude::*;

#[component]
pub fn TagList(tags: Vec<String>, #[prop(into)] tag_class: String) -> impl IntoView {
    let item_class = format!("tag-default tag-pill {tag_class}");
    view! {
        <ul class="tag-list">
            {tags
                .into_iter()
                .map(|tag| view! { <li class=item_class.clone()>{tag}</li> })
                .collect_view()}
        </ul>
    }
}
