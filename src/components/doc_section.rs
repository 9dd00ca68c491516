//! Doc Section Component
//!
//! Renders one section of the docs content tree.

use leptos::prelude::*;

use crate::components::{FaqAccordion, Icon};
use crate::docs::{Block, CodeExample, DocSection, Endpoint, Step, SupportAction, SupportCard};
use crate::markdown::{parse_markdown, parse_markdown_inline};

#[component]
pub fn DocSectionView(section: &'static DocSection) -> impl IntoView {
    view! {
        <section id=section.id.as_str() class="doc-section">
            <div class="section-heading">
                <Icon name=section.icon class=section.tone.class() />
                <h2>{section.heading}</h2>
            </div>
            <div class="card">
                {section.blocks.iter().map(render_block).collect_view()}
            </div>
        </section>
    }
}

fn render_block(block: &'static Block) -> AnyView {
    match block {
        Block::Paragraph(text) => view! { <p class="paragraph" inner_html=parse_markdown_inline(text)></p> }.into_any(),
        Block::Badges(badges) => view! {
            <div class="badges">
                {badges
                    .iter()
                    .map(|badge| view! { <span class=format!("badge {}", badge.tone.class())>{badge.text}</span> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        Block::Steps(steps) => view! {
            <ol class="steps">{steps.iter().enumerate().map(|(i, step)| render_step(i + 1, step)).collect_view()}</ol>
        }
        .into_any(),
        Block::CodeExamples(examples) => view! {
            <div class="examples">{examples.iter().map(render_example).collect_view()}</div>
        }
        .into_any(),
        Block::Endpoints(endpoints) => view! {
            <div class="endpoints">{endpoints.iter().map(render_endpoint).collect_view()}</div>
        }
        .into_any(),
        Block::Faq(entries) => view! { <FaqAccordion entries=*entries /> }.into_any(),
        Block::SupportCards(cards) => view! {
            <div class="support-grid">{cards.iter().map(render_support_card).collect_view()}</div>
        }
        .into_any(),
    }
}

fn render_step(number: usize, step: &'static Step) -> impl IntoView {
    view! {
        <li class="step">
            <div class="step-number">{number}</div>
            <div class="step-body">
                <h3>{step.title}</h3>
                {step.code.map(|code| view! { <div class="code-line">{code}</div> })}
                {step.text.map(|text| view! { <p class="muted">{text}</p> })}
            </div>
        </li>
    }
}

fn render_example(example: &'static CodeExample) -> impl IntoView {
    view! {
        <div class="example">
            <h3>
                <Icon name=example.icon />
                {example.title}
            </h3>
            <div class="code-block" inner_html=parse_markdown(example.body)></div>
            <p class="muted">{example.caption}</p>
        </div>
    }
}

fn render_endpoint(endpoint: &'static Endpoint) -> impl IntoView {
    view! {
        <div class="endpoint">
            <div class="endpoint-line">
                <span class=format!("badge {}", endpoint.method.tone().class())>{endpoint.method.as_str()}</span>
                <code>{endpoint.path}</code>
            </div>
            <p class="muted">{endpoint.description}</p>
        </div>
    }
}

fn render_support_card(card: &'static SupportCard) -> impl IntoView {
    let action = match card.action {
        SupportAction::Link { href, label, external } => view! {
            <a
                href=href
                class="support-link"
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
            >
                {label}
            </a>
        }
        .into_any(),
        SupportAction::Button { label, tone } => view! {
            <button class=format!("btn {}", tone.class())>{label}</button>
        }
        .into_any(),
    };

    view! {
        <div class="support-card">
            <div class="support-card-heading">
                <Icon name=card.icon class=card.tone.class() />
                <h3>{card.title}</h3>
            </div>
            <p class="muted">{card.text}</p>
            {action}
        </div>
    }
}
