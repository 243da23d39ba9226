use yew::prelude::*;

/// A block of page content. Sections without an id are plain wrappers and
/// never become navigation anchors.
#[derive(Clone, PartialEq)]
pub struct SectionNode {
    pub id: Option<&'static str>,
    pub class: Option<&'static str>,
    pub content: Html,
    pub children: Vec<SectionNode>,
}

impl SectionNode {
    pub fn new(id: &'static str, class: &'static str, content: Html) -> Self {
        Self {
            id: Some(id),
            class: Some(class),
            content,
            children: Vec::new(),
        }
    }

    pub fn group(children: Vec<SectionNode>) -> Self {
        Self {
            id: None,
            class: None,
            content: html! {},
            children,
        }
    }
}

/// Ids of every section, depth first, in render order.
pub fn anchor_ids(sections: &[SectionNode]) -> Vec<&'static str> {
    let mut ids = Vec::new();
    for section in sections {
        ids.extend(section.id);
        ids.extend(anchor_ids(&section.children));
    }
    ids
}

#[derive(Properties, PartialEq)]
pub struct SectionRendererProps {
    pub section: SectionNode,
}

#[function_component(SectionRenderer)]
pub fn section_renderer(props: &SectionRendererProps) -> Html {
    let section = &props.section;
    html! {
        <section
            id={section.id.map(AttrValue::from)}
            class={classes!("section-shell", "section-fullscreen", section.class)}
        >
            { section.content.clone() }
            {
                for section.children.iter().enumerate().map(|(index, child)| {
                    let key = child.id.map(str::to_string).unwrap_or_else(|| index.to_string());
                    html! { <SectionRenderer key={key} section={child.clone()} /> }
                })
            }
        </section>
    }
}
