use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::components::buttons::{ScheduleButton, WhatsAppButton};
use crate::components::nav::{Nav, SectionRail};
use crate::components::schedule_modal::{BrowserWindow, ScheduleModal};
use crate::components::scroll_spy::use_active_section;
use crate::components::section::{anchor_ids, SectionNode, SectionRenderer};
use crate::config::NAV_ITEMS;
use crate::content::{self, Card, PriceRow};
use crate::pricing::estimate_hours_label;
use crate::schedule::{self, ScheduleComposer};

const SHELL: &str = "section-dark";

// Layout only: what the overlay, fixed bars and active markers need to behave.
const LAYOUT_CSS: &str = r#"
    html { scroll-behavior: smooth; }
    body { margin: 0; }
    .nav-glass {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
    }
    .nav-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0 24px;
        height: 64px;
    }
    .nav-links, .nav-actions { display: flex; gap: 16px; }
    .nav-link.active { font-weight: 700; text-decoration: underline; }
    .burger-menu { display: none; }
    .mobile-menu { display: flex; flex-direction: column; gap: 12px; padding: 16px 24px; }
    .nav-spacer { height: 64px; }
    .section-fullscreen { min-height: 100vh; box-sizing: border-box; scroll-margin-top: 64px; }
    .section-rail {
        position: fixed;
        right: 16px;
        top: 50%;
        transform: translateY(-50%);
        z-index: 90;
    }
    .section-rail-inner { display: flex; flex-direction: column; gap: 12px; }
    .rail-dot {
        display: block;
        width: 10px;
        height: 10px;
        border-radius: 50%;
        border: 1px solid currentColor;
        position: relative;
    }
    .rail-dot.active { background: currentColor; transform: scale(1.4); }
    .rail-tooltip { display: none; position: absolute; right: 18px; white-space: nowrap; }
    .rail-dot:hover .rail-tooltip { display: block; }
    .modal-overlay {
        position: fixed;
        inset: 0;
        z-index: 1000;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.6);
    }
    .modal-content {
        width: min(480px, calc(100vw - 32px));
        padding: 24px;
        border-radius: 12px;
        background: #fff;
        color: #111;
    }
    .modal-header, .modal-buttons { display: flex; justify-content: space-between; gap: 12px; }
    .modal-button[disabled] { opacity: 0.5; cursor: not-allowed; }
    @media (max-width: 900px) {
        .nav-links, .nav-actions, .section-rail { display: none; }
        .burger-menu { display: block; }
    }
"#;

fn cards(cards: &[Card], class: &'static str) -> Html {
    html! {
        <div class="card-grid">
            {
                for cards.iter().map(|card| html! {
                    <div key={card.title} class={classes!("card", class)}>
                        <i class={classes!("fa-solid", card.icon)}></i>
                        <h3>{ card.title }</h3>
                        <p>{ card.text }</p>
                    </div>
                })
            }
        </div>
    }
}

fn price_table(title: &'static str, rows: &[PriceRow]) -> Html {
    html! {
        <div class="price-table">
            <h3>{ title }</h3>
            <table class="custom-table">
                <thead>
                    <tr>
                        <th>{"Tipo"}</th>
                        <th>{"Complexidade"}</th>
                        <th class="align-right">{"Estimativa (horas)"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for rows.iter().map(|row| html! {
                            <tr key={row.label}>
                                <td>{ row.label }</td>
                                <td><span class={classes!("badge", row.level_class)}>{ row.level }</span></td>
                                <td class="align-right">{ estimate_hours_label(row.price) }</td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}

fn heading(title: &'static str, subtitle: &'static str) -> Html {
    html! {
        <div class="section-heading">
            <h2>{ title }</h2>
            <p>{ subtitle }</p>
        </div>
    }
}

/// Every section of the page, in order.
pub fn sections(on_schedule: Callback<()>) -> Vec<SectionNode> {
    let catalogs = content::CATALOGS
        .iter()
        .map(|catalog| {
            SectionNode::new(
                catalog.id,
                SHELL,
                html! {
                    <div class="section-inner">
                        { heading(catalog.title, catalog.subtitle) }
                        { cards(catalog.items, "catalog-card") }
                    </div>
                },
            )
        })
        .collect();

    vec![
        SectionNode::new(
            "hero",
            "hero",
            html! {
                <div class="section-inner hero-inner">
                    <p class="hero-badge">{"Soluções Enterprise"}</p>
                    <h1>{"Automação + IA "}<span>{"Sob Medida"}</span></h1>
                    <h2>{"para Seu Negócio"}</h2>
                    <p class="hero-subtitle">
                        {"Transformamos processos manuais repetitivos em fluxos digitais inteligentes, auditáveis e escaláveis. Do WhatsApp ao ERP, em minutos."}
                    </p>
                    <div class="hero-actions">
                        <ScheduleButton onclick={on_schedule.clone()} class={classes!("cta-button")}>
                            <i class="fa-solid fa-calendar-check"></i>{" Agendar demonstração"}
                        </ScheduleButton>
                        <WhatsAppButton label="Falar no WhatsApp" class={classes!("cta-secondary")} />
                    </div>
                </div>
            },
        ),
        SectionNode::new(
            "problema",
            SHELL,
            html! {
                <div class="section-inner">
                    { heading("O problema das operações manuais", "Falta de controle, erros e retrabalho criam um ciclo caro que trava o crescimento.") }
                    { cards(content::PROBLEMS, "glass") }
                </div>
            },
        ),
        SectionNode::new(
            "valor",
            SHELL,
            html! {
                <div class="section-inner">
                    { heading("O que entregamos", "Automação auditável, integração rápida e escala segura.") }
                    { cards(content::KPIS, "kpi-card") }
                </div>
            },
        ),
        SectionNode::new(
            "metodologia",
            SHELL,
            html! {
                <div class="section-inner">
                    { heading("Metodologia Atlas.Automate", "Deploy rápido, controle total e evolução contínua.") }
                    { cards(content::METHOD_STEPS, "method-card") }
                </div>
            },
        ),
        SectionNode::group(catalogs),
        SectionNode::new(
            "mapa",
            SHELL,
            html! {
                <div class="section-inner">
                    { heading("Quanto custa integrar?", "O mapa da complexidade") }
                    { price_table("Integrações", content::INTEGRATION_ROWS) }
                    { price_table("Entrada (Captura)", content::CAPTURE_ROWS) }
                </div>
            },
        ),
        SectionNode::new(
            "preco",
            SHELL,
            html! {
                <div class="section-inner">
                    { heading("Como cobramos? Simples e transparente", "Estrutura dividida em Setup (construção do ativo) e Mensalidade (sustentação e evolução).") }
                    <div class="hero-actions">
                        <ScheduleButton onclick={on_schedule} class={classes!("cta-button")}>
                            <i class="fa-solid fa-calendar-check"></i>{" Agendar demonstração"}
                        </ScheduleButton>
                    </div>
                </div>
            },
        ),
        SectionNode::new(
            "faq",
            SHELL,
            html! {
                <div class="section-inner">
                    <h2>{"Dúvidas frequentes"}</h2>
                    {
                        for content::FAQ.iter().map(|entry| html! {
                            <details key={entry.question} class="faq-item">
                                <summary>{ entry.question }</summary>
                                <p>{ entry.answer }</p>
                            </details>
                        })
                    }
                </div>
            },
        ),
    ]
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div>
                    <div class="nav-logo">{"Atlas"}<span>{".Automate"}</span></div>
                    <p>{"Automação + IA sob medida para reduzir custo operacional, aumentar rastreabilidade e escalar operações com segurança."}</p>
                </div>
                <div class="footer-links">
                    { for NAV_ITEMS.iter().map(|item| html! { <a key={item.href} href={item.href}>{ item.label }</a> }) }
                </div>
            </div>
            <p class="footer-legal">{"© 2026 Atlas.Automate. Todos os direitos reservados."}</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let composer = use_state(ScheduleComposer::new);

    let open_schedule = {
        let composer = composer.clone();
        Callback::from(move |_: ()| {
            let mut next = (*composer).clone();
            next.open();
            composer.set(next);
        })
    };

    let select_date = {
        let composer = composer.clone();
        Callback::from(move |value: String| {
            let mut next = (*composer).clone();
            match next.select_date(&value, schedule::today()) {
                Ok(()) => {
                    let shown = next.selected_date();
                    composer.set(next);
                    shown
                }
                Err(err) => {
                    warn!("Ignoring date input: {}", err);
                    composer.selected_date()
                }
            }
        })
    };

    let confirm_schedule = {
        let composer = composer.clone();
        Callback::from(move |_: ()| {
            let mut next = (*composer).clone();
            if next.confirm(&BrowserWindow).is_some() {
                composer.set(next);
            }
        })
    };

    let close_schedule = {
        let composer = composer.clone();
        Callback::from(move |_: ()| {
            let mut next = (*composer).clone();
            next.cancel();
            composer.set(next);
        })
    };

    // The schedule buttons only fire while the modal is closed, so the
    // section tree is rebuilt on open/close transitions and nowhere else.
    let sections = {
        let open_schedule = open_schedule.clone();
        use_memo(move |_| sections(open_schedule), composer.is_open())
    };
    let active_section = use_active_section(Rc::new(anchor_ids(&sections)));

    use_effect_with_deps(
        |_| {
            info!("Landing page mounted with {} navigation entries", NAV_ITEMS.len());
            || ()
        },
        (),
    );

    html! {
        <>
            <style>{ LAYOUT_CSS }</style>
            <Nav active_section={active_section.clone()} on_schedule={open_schedule} />
            <div class="nav-spacer"></div>
            <SectionRail active_section={active_section} />
            <main>
                {
                    for sections.iter().enumerate().map(|(index, section)| {
                        let key = section.id.map(str::to_string).unwrap_or_else(|| index.to_string());
                        html! { <SectionRenderer key={key} section={section.clone()} /> }
                    })
                }
            </main>
            <Footer />
            <ScheduleModal
                composer={(*composer).clone()}
                min_date={schedule::min_date(schedule::today())}
                on_close={close_schedule}
                on_date_change={select_date}
                on_confirm={confirm_schedule}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_navigation_target_is_rendered() {
        let ids = anchor_ids(&sections(Callback::noop()));
        for item in NAV_ITEMS {
            assert!(ids.contains(&item.target_id()), "missing section for {}", item.href);
        }
    }

    #[test]
    fn layout_css_pins_overlay_and_bars() {
        for rule in [".modal-overlay {", ".nav-glass {", ".section-rail {"] {
            let block = LAYOUT_CSS.split(rule).nth(1).unwrap().split('}').next().unwrap();
            assert!(block.contains("position: fixed"), "{} is not fixed", rule);
        }
        assert!(LAYOUT_CSS.contains("inset: 0;"));
        assert!(LAYOUT_CSS.contains(".rail-dot.active"));
        assert!(LAYOUT_CSS.contains(".nav-link.active"));
    }

    #[test]
    fn catalog_sections_sit_inside_an_anonymous_group() {
        let sections = sections(Callback::noop());
        let group = sections.iter().find(|section| section.id.is_none()).unwrap();
        assert_eq!(
            anchor_ids(&group.children),
            ["catalogo-entradas", "catalogo-processamento", "catalogo-saidas"]
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, EventInit, HtmlElement, HtmlInputElement};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
        TimeoutFuture::new(20).await;
    }

    fn modal_open(root: &Element) -> bool {
        root.query_selector(".modal-overlay").unwrap().is_some()
    }

    #[wasm_bindgen_test]
    async fn schedule_buttons_keep_working_across_open_and_close() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<Landing>::with_root(root.clone()).render();
        TimeoutFuture::new(20).await;
        assert!(!modal_open(&root));

        click(&root, "#hero .cta-button").await;
        assert!(modal_open(&root));

        let input: HtmlInputElement = root
            .query_selector("input[type=date]")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_value(&schedule::min_date(schedule::today()));
        let mut init = EventInit::new();
        init.bubbles(true);
        input
            .dispatch_event(&Event::new_with_event_init_dict("change", &init).unwrap())
            .unwrap();
        TimeoutFuture::new(20).await;
        assert!(root.query_selector(".modal-preview").unwrap().is_some());

        click(&root, ".modal-button.cancel").await;
        assert!(!modal_open(&root));

        click(&root, "#preco .cta-button").await;
        assert!(modal_open(&root));
        assert!(root.query_selector(".modal-preview").unwrap().is_none());

        click(&root, ".modal-overlay").await;
        assert!(!modal_open(&root));

        root.remove();
    }
}
