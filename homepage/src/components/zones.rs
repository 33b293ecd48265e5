//! Homes in every zone: zone grid plus the detail modal
//!
//! Every zone gets a pre-rendered detail panel whose sidebar lists all other
//! zones. The script only toggles which panel is visible, following
//! [`ZoneSelection`].

use leptos::prelude::*;

use super::{Icon, ICON_CLOSE, ICON_MAP_PIN};
use crate::content::Zone;
use crate::filters::build_filter_url;
use crate::selection::ZoneSelection;

pub const NO_ZONES: &str = "No zones available.";

/// Zone grid and detail modal
#[component]
pub fn HomesInEveryZone(zones: Vec<Zone>, selection: ZoneSelection) -> impl IntoView {
    if zones.is_empty() {
        return view! {
            <section id="homes-in-every-zone" class="section zones">
                <div class="container">
                    <ZonesHeader />
                    <p class="empty-state">{NO_ZONES}</p>
                </div>
            </section>
        }
        .into_any();
    }

    let cards = zones
        .iter()
        .map(|zone| {
            view! {
                <button class="zone-card" data-zone-open=zone.id.to_string()>
                    <img
                        class="zone-image"
                        src=zone.image.clone()
                        alt=zone.name.clone()
                        loading="lazy"
                    />
                    <span class="zone-name">{zone.name.clone()}</span>
                    <span class="zone-projects">{zone.projects.clone()}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let panels = zones
        .iter()
        .map(|zone| {
            let mut panel_selection = ZoneSelection::default();
            panel_selection.select(zone.id);
            let others = panel_selection
                .sidebar(&zones)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            let active = selection == panel_selection;
            view! { <ZoneDetail zone=zone.clone() others=others active=active /> }
        })
        .collect::<Vec<_>>();

    let modal_class = if selection.is_open() {
        "zone-modal open"
    } else {
        "zone-modal"
    };
    let hidden = if selection.is_open() { "false" } else { "true" };

    view! {
        <section id="homes-in-every-zone" class="section zones">
            <div class="container">
                <ZonesHeader />
                <div class="zone-grid">{cards}</div>
            </div>
            <div
                class=modal_class
                data-zone-modal="true"
                role="dialog"
                aria-modal="true"
                aria-hidden=hidden
            >
                <div class="zone-dialog">
                    <button class="modal-close" data-zone-close="true" aria-label="Close">
                        <Icon path=ICON_CLOSE size="18" />
                    </button>
                    {panels}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn ZonesHeader() -> impl IntoView {
    view! {
        <div class="section-header">
            <p class="section-eyebrow">"Explore the city"</p>
            <h2 class="section-title">"Homes in Every Zone"</h2>
        </div>
    }
}

/// Detail panel for one zone with the other zones in a sidebar
#[component]
fn ZoneDetail(zone: Zone, others: Vec<Zone>, active: bool) -> impl IntoView {
    let class = if active { "zone-panel active" } else { "zone-panel" };
    let listing = build_filter_url(Some(&zone.name), None);

    view! {
        <div class=class data-zone-panel=zone.id.to_string()>
            <div class="zone-detail">
                <img class="zone-detail-image" src=zone.image alt=zone.name.clone() />
                <h3 class="zone-detail-name">
                    <Icon path=ICON_MAP_PIN size="18" />
                    {zone.name.clone()}
                </h3>
                <p class="zone-detail-projects">{zone.projects}</p>
                <a class="btn btn-primary" href=listing>
                    {format!("View projects in {}", zone.name)}
                </a>
            </div>
            <aside class="zone-sidebar">
                <h4>"Other zones"</h4>
                <ul>
                    {others
                        .into_iter()
                        .map(|other| {
                            view! {
                                <li>
                                    <button
                                        class="zone-sidebar-item"
                                        data-zone-select=other.id.to_string()
                                    >
                                        <span class="zone-name">{other.name}</span>
                                        <span class="zone-projects">{other.projects}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </aside>
        </div>
    }
}
