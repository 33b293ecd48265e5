//! Root document component - the complete homepage
//!
//! Sections render top to bottom in a fixed order. Interactive state that
//! the server already knows (active trending tab, open zone, open enquiry)
//! comes from [`ViewState`]; the inline script takes over in the browser.

use leptos::prelude::*;

use super::{
    BankPartners, DiscoverNeighborhoods, EnquiryDialog, FrequentlyAskedQuestions, HeroBanner,
    HomesInEveryZone, NewlyLaunched, SiteFooter, TrendingProjects, VirtualTours,
    WhyChooseUsSection,
};
use crate::config::HomepageConfig;
use crate::content::WebsiteContent;
use crate::styles::{CSP, HOMEPAGE_CSS};
use crate::view_state::ViewState;

/// The complete HTML document for the homepage
#[component]
pub fn HomepageDocument(
    content: WebsiteContent,
    config: HomepageConfig,
    view_state: ViewState,
) -> impl IntoView {
    let settings = config.carousel.settings();
    let policy = config.raw_html;
    let WebsiteContent {
        hero,
        banks,
        discover_neighborhoods,
        frequently_asked_questions,
        homes_in_every_zone,
        mumbai_homes,
        newly_launched,
        trending_projects,
        virtual_tours,
        why_choose_us,
    } = content;
    let ViewState {
        trending,
        zone,
        enquiry,
    } = view_state;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{config.site_title}</title>
                <style>{HOMEPAGE_CSS}</style>
            </head>
            <body>
                <main class="homepage">
                    <HeroBanner hero=hero policy=policy />
                    <BankPartners banks=banks settings=settings />
                    <DiscoverNeighborhoods categories=discover_neighborhoods policy=policy />
                    <TrendingProjects projects=trending_projects tabs=trending settings=settings />
                    <HomesInEveryZone zones=homes_in_every_zone selection=zone />
                    <NewlyLaunched projects=newly_launched settings=settings />
                    <VirtualTours tours=virtual_tours settings=settings policy=policy />
                    <WhyChooseUsSection content=why_choose_us />
                    <FrequentlyAskedQuestions faqs=frequently_asked_questions />
                </main>
                <SiteFooter footer=mumbai_homes policy=policy />
                <EnquiryDialog modal=enquiry />
                <script>{APP_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Browser behaviour: tabs, zone modal, enquiry modal, carousels
const APP_SCRIPT: &str = r#"
(() => {
  // 1. Tabs, scoped per section
  document.querySelectorAll('.tab-bar[data-tab-scope]').forEach(bar => {
    const scope = bar.dataset.tabScope;
    const panels = document.querySelector(`.tab-panels[data-tab-scope="${scope}"]`);
    bar.querySelectorAll('[data-tab]').forEach(btn => {
      btn.addEventListener('click', () => {
        const key = btn.dataset.tab;
        bar.querySelectorAll('[data-tab]').forEach(b => {
          const on = b === btn;
          b.classList.toggle('active', on);
          b.setAttribute('aria-selected', on ? 'true' : 'false');
        });
        if (!panels) return;
        panels.querySelectorAll(':scope > [data-tab-panel]').forEach(p => {
          p.classList.toggle('active', p.dataset.tabPanel === key);
        });
      });
    });
  });

  // 2. Zone modal
  const zoneModal = document.querySelector('[data-zone-modal]');
  const showZone = (id) => {
    if (!zoneModal) return;
    zoneModal.querySelectorAll('[data-zone-panel]').forEach(p => {
      p.classList.toggle('active', p.dataset.zonePanel === id);
    });
    zoneModal.classList.add('open');
    zoneModal.setAttribute('aria-hidden', 'false');
  };
  const closeZone = () => {
    if (!zoneModal) return;
    zoneModal.classList.remove('open');
    zoneModal.setAttribute('aria-hidden', 'true');
  };
  document.querySelectorAll('[data-zone-open]').forEach(btn => {
    btn.addEventListener('click', () => showZone(btn.dataset.zoneOpen));
  });
  document.querySelectorAll('[data-zone-select]').forEach(btn => {
    btn.addEventListener('click', () => showZone(btn.dataset.zoneSelect));
  });
  document.querySelectorAll('[data-zone-close]').forEach(btn => {
    btn.addEventListener('click', closeZone);
  });
  if (zoneModal) {
    zoneModal.addEventListener('click', (e) => {
      if (e.target === zoneModal) closeZone();
    });
  }

  // 3. Enquiry modal
  const enquiryModal = document.querySelector('[data-enquiry-modal]');
  const enquiryForm = document.querySelector('[data-enquiry-form]');
  const enquiryError = document.querySelector('[data-enquiry-error]');
  const enquiryProject = document.querySelector('[data-enquiry-project]');
  const openEnquiry = (project) => {
    if (!enquiryModal) return;
    if (enquiryProject) enquiryProject.textContent = project || '';
    if (enquiryError) enquiryError.textContent = '';
    enquiryModal.dataset.project = project || '';
    enquiryModal.classList.add('open');
    enquiryModal.setAttribute('aria-hidden', 'false');
  };
  const closeEnquiry = () => {
    if (!enquiryModal) return;
    enquiryModal.classList.remove('open');
    enquiryModal.setAttribute('aria-hidden', 'true');
    if (enquiryForm) enquiryForm.reset();
  };
  document.querySelectorAll('[data-open-enquiry]').forEach(btn => {
    btn.addEventListener('click', () => openEnquiry(btn.dataset.openEnquiry));
  });
  document.querySelectorAll('[data-enquiry-close]').forEach(btn => {
    btn.addEventListener('click', closeEnquiry);
  });
  if (enquiryModal) {
    enquiryModal.addEventListener('click', (e) => {
      if (e.target === enquiryModal) closeEnquiry();
    });
  }
  if (enquiryForm && enquiryModal) {
    enquiryForm.addEventListener('submit', (e) => {
      e.preventDefault();
      const data = new FormData(enquiryForm);
      if (!data.get('agreedToTerms')) {
        const msg = enquiryModal.dataset.termsMessage;
        if (enquiryError) enquiryError.textContent = msg;
        window.alert(msg);
        return;
      }
      const detail = {
        username: data.get('username') || '',
        phone: data.get('phone') || '',
        email: data.get('email') || '',
        message: data.get('message') || '',
        agreedToTerms: true,
        project: enquiryModal.dataset.project || null,
      };
      document.dispatchEvent(new CustomEvent('enquiry:submit', { detail }));
      closeEnquiry();
    });
  }

  document.addEventListener('keydown', (e) => {
    if (e.key !== 'Escape') return;
    closeZone();
    closeEnquiry();
  });

  // 4. Carousels: looping autoplay, paused on hover and after interaction
  document.querySelectorAll('[data-carousel]').forEach(root => {
    const track = root.querySelector('.carousel-track');
    if (!track) return;
    const autoplay = Number(root.dataset.autoplayMs) || 4000;
    const resumeAfter = Number(root.dataset.resumeAfterMs) || 4000;
    let index = Number(root.dataset.index) || 0;
    let hovered = false;
    let lastInteraction = 0;

    const count = () => track.querySelectorAll(':scope > .carousel-slide').length;
    const render = () => {
      root.dataset.index = String(index);
      track.style.setProperty('--carousel-index', String(index));
    };
    const step = (delta) => {
      const n = count();
      if (n === 0) {
        index = 0;
      } else {
        index = ((index + delta) % n + n) % n;
      }
      render();
    };
    const interact = () => { lastInteraction = Date.now(); };

    root.addEventListener('mouseenter', () => { hovered = true; });
    root.addEventListener('mouseleave', () => { hovered = false; });
    root.addEventListener('touchstart', interact, { passive: true });
    const prev = root.querySelector('[data-carousel-prev]');
    const next = root.querySelector('[data-carousel-next]');
    if (prev) prev.addEventListener('click', () => { interact(); step(-1); });
    if (next) next.addEventListener('click', () => { interact(); step(1); });

    setInterval(() => {
      const n = count();
      if (index >= n) index = 0;
      if (n < 2 || hovered) return;
      if (Date.now() - lastInteraction < resumeAfter) return;
      step(1);
    }, autoplay);
    render();
  });
})();
"#;
