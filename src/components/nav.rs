use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::buttons::{ScheduleButton, WhatsAppButton};
use crate::config::NAV_ITEMS;
use crate::observer::nav_markers;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active_section: AttrValue,
    pub on_schedule: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active_section, on_schedule } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 16.0);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let schedule_from_menu = {
        let menu_open = menu_open.clone();
        let on_schedule = on_schedule.clone();
        Callback::from(move |_: ()| {
            menu_open.set(false);
            on_schedule.emit(());
        })
    };

    let active_id: &str = active_section;
    let link_class = |active: bool| classes!("nav-link", active.then_some("active"));

    html! {
        <nav class={classes!("nav-glass", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">
                    <i class="fa-solid fa-brain"></i>
                    {"Atlas"}<span>{".Automate"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <i class="fa-solid fa-bars"></i>
                </button>

                <div class="nav-links">
                    {
                        for nav_markers(NAV_ITEMS, active_id).map(|(item, active)| html! {
                            <a key={item.href} class={link_class(active)} href={item.href}>
                                { item.label }
                            </a>
                        })
                    }
                </div>

                <div class="nav-actions">
                    <ScheduleButton onclick={on_schedule.clone()} class={classes!("nav-schedule-button")}>
                        <i class="fa-solid fa-calendar-check"></i>{" Agendar demo"}
                    </ScheduleButton>
                    <WhatsAppButton label="WhatsApp" class={classes!("nav-whatsapp-button")} />
                </div>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            {
                                for nav_markers(NAV_ITEMS, active_id).map(|(item, active)| html! {
                                    <a
                                        key={item.href}
                                        class={link_class(active)}
                                        href={item.href}
                                        onclick={close_menu.clone()}
                                    >
                                        { item.label }
                                    </a>
                                })
                            }
                            <ScheduleButton onclick={schedule_from_menu} class={classes!("nav-schedule-button")}>
                                <i class="fa-solid fa-calendar-check"></i>{" Agendar demonstração"}
                            </ScheduleButton>
                            <WhatsAppButton label="Falar no WhatsApp" class={classes!("nav-whatsapp-button")} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionRailProps {
    pub active_section: AttrValue,
}

/// Dots on the right edge, one per navigation entry.
#[function_component(SectionRail)]
pub fn section_rail(props: &SectionRailProps) -> Html {
    html! {
        <div class="section-rail">
            <div class="section-rail-inner">
                {
                    for nav_markers(NAV_ITEMS, &props.active_section).map(|(item, active)| {
                        html! {
                            <a
                                key={item.href}
                                href={item.href}
                                class={classes!("rail-dot", active.then_some("active"))}
                                aria-label={format!("Ir para {}", item.label)}
                                title={item.label}
                            >
                                <span class="rail-tooltip">{ item.label }</span>
                            </a>
                        }
                    })
                }
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(class: &str) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_class_name(class);
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    async fn rail_marks_only_the_active_section() {
        let root = mount("rail-root");
        yew::Renderer::<SectionRail>::with_root_and_props(
            root.clone(),
            SectionRailProps { active_section: "preco".into() },
        )
        .render();
        gloo_timers::future::TimeoutFuture::new(20).await;

        let active = root.query_selector_all(".rail-dot.active").unwrap();
        assert_eq!(active.length(), 1);
        let dot: web_sys::Element = active.item(0).unwrap().dyn_into().unwrap();
        assert_eq!(dot.get_attribute("href").as_deref(), Some("#preco"));
        assert_eq!(root.query_selector_all(".rail-dot").unwrap().length() as usize, NAV_ITEMS.len());
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn nav_marks_only_the_active_link() {
        let root = mount("nav-root");
        yew::Renderer::<Nav>::with_root_and_props(
            root.clone(),
            NavProps { active_section: "faq".into(), on_schedule: Callback::noop() },
        )
        .render();
        gloo_timers::future::TimeoutFuture::new(20).await;

        let active = root.query_selector_all(".nav-link.active").unwrap();
        assert_eq!(active.length(), 1);
        let link: web_sys::Element = active.item(0).unwrap().dyn_into().unwrap();
        assert_eq!(link.get_attribute("href").as_deref(), Some("#faq"));
        root.remove();
    }
}
