//! # Actions
//!
//! Everything that can happen in the portal becomes an `Action`.
//! User picks a nav entry? That's `Action::Navigate(page)`.
//! The slideshow timer fires? That's `Action::SlideTick { epoch }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` describing the I/O the adapter must
//! perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::core::i18n::Language;
use crate::core::page::{Page, PageGroup};
use crate::core::state::{App, ViewState};
use crate::core::widgets::FormEdit;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Page),
    SetLanguage(Language),
    ToggleMobileMenu,
    CloseMobileMenu,
    OpenDropdown(PageGroup),
    CloseDropdown,
    /// Auto-advance from the slideshow timer.
    SlideTick { epoch: u64 },
    SlideNext,
    SlidePrev,
    SlideSelect(usize),
    /// The statistics band became at least 30% visible.
    StatsVisible(Instant),
    SelectAudience(String),
    SelectNewsCategory(String),
    ContactEdit(FormEdit),
    SubmitContact,
    /// Fired by the form-reset timer.
    ResetContactForm { epoch: u64 },
    Quit,
}

/// I/O requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// The page changed. `remounted` means the previous view's timers must go.
    Navigated { remounted: bool },
    LanguageChanged(Language),
    ScheduleFormReset,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(page) => {
            let nav = app.router.change_page(page);
            app.header.mobile_menu_open = false;
            app.header.active_dropdown = None;
            if nav.remounted {
                app.view_epoch += 1;
                app.view = ViewState::mount(nav.to.group(), &app.timing);
                debug!(
                    "Mounted {} view (epoch {})",
                    nav.to.group().tag(),
                    app.view_epoch
                );
            }
            info!("Navigated {} -> {}", nav.from.tag(), nav.to.tag());
            Effect::Navigated {
                remounted: nav.remounted,
            }
        }
        Action::SetLanguage(language) => {
            app.localizer.set_language(language);
            app.status_message = format!("Language: {}", language.native_name());
            info!("Language set to {}", language.code());
            Effect::LanguageChanged(language)
        }
        Action::ToggleMobileMenu => {
            app.header.mobile_menu_open = !app.header.mobile_menu_open;
            app.header.active_dropdown = None;
            Effect::None
        }
        Action::CloseMobileMenu => {
            app.header.mobile_menu_open = false;
            Effect::None
        }
        Action::OpenDropdown(group) => {
            if group.nav_entry().has_dropdown() {
                app.header.active_dropdown = Some(group);
            }
            Effect::None
        }
        Action::CloseDropdown => {
            app.header.active_dropdown = None;
            Effect::None
        }
        Action::SlideTick { epoch } => {
            if epoch != app.view_epoch {
                debug!("Dropping stale slide tick (epoch {epoch}, now {})", app.view_epoch);
                return Effect::None;
            }
            if let ViewState::Home(home) = &mut app.view {
                home.slides.advance();
            }
            Effect::None
        }
        Action::SlideNext => {
            if let ViewState::Home(home) = &mut app.view {
                home.slides.advance();
            }
            Effect::None
        }
        Action::SlidePrev => {
            if let ViewState::Home(home) = &mut app.view {
                home.slides.back();
            }
            Effect::None
        }
        Action::SlideSelect(index) => {
            if let ViewState::Home(home) = &mut app.view {
                home.slides.select(index);
            }
            Effect::None
        }
        Action::StatsVisible(now) => {
            if let ViewState::Home(home) = &mut app.view {
                let mut started = false;
                for counter in &mut home.stats {
                    started |= counter.trigger(now);
                }
                if started {
                    debug!("Statistics count-up started");
                }
            }
            Effect::None
        }
        Action::SelectAudience(id) => {
            if let ViewState::Home(home) = &mut app.view {
                home.audience.select(&id);
            }
            Effect::None
        }
        Action::SelectNewsCategory(id) => {
            if let ViewState::News(filter) = &mut app.view {
                filter.select(&id);
            }
            Effect::None
        }
        Action::ContactEdit(edit) => {
            if let ViewState::Contact(form) = &mut app.view {
                form.edit(edit);
            }
            Effect::None
        }
        Action::SubmitContact => {
            let ViewState::Contact(form) = &mut app.view else {
                return Effect::None;
            };
            if form.submit() {
                info!(
                    "Contact form submitted (subject: {})",
                    form.subject_value().unwrap_or("-")
                );
                app.status_message = String::from("Message sent");
                Effect::ScheduleFormReset
            } else {
                Effect::None
            }
        }
        Action::ResetContactForm { epoch } => {
            if epoch != app.view_epoch {
                debug!("Dropping stale form reset (epoch {epoch}, now {})", app.view_epoch);
                return Effect::None;
            }
            if let ViewState::Contact(form) = &mut app.view {
                form.reset();
                app.status_message.clear();
                debug!("Contact form reset");
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::widgets::{ContactField, FormStatus};
    use crate::test_support::test_app;
    use std::time::Duration;

    fn type_text(app: &mut App, field: ContactField, text: &str) {
        update(app, Action::ContactEdit(FormEdit::Focus(field)));
        for c in text.chars() {
            update(app, Action::ContactEdit(FormEdit::Insert(c)));
        }
    }

    fn fill_contact(app: &mut App) {
        type_text(app, ContactField::Name, "Dilnoza");
        type_text(app, ContactField::Email, "d@example.uz");
        update(app, Action::ContactEdit(FormEdit::Focus(ContactField::Subject)));
        update(app, Action::ContactEdit(FormEdit::NextOption));
        type_text(app, ContactField::Message, "When is the open day?");
    }

    #[test]
    fn test_navigate_to_vision_mounts_about() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Navigate(Page::Vision));
        assert_eq!(effect, Effect::Navigated { remounted: true });
        assert_eq!(app.current_page(), Page::Vision);
        assert_eq!(app.view.group(), PageGroup::About);
        assert_eq!(app.view_epoch, 1);
    }

    #[test]
    fn test_same_group_navigation_keeps_view() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Page::Vision));
        let effect = update(&mut app, Action::Navigate(Page::History));
        assert_eq!(effect, Effect::Navigated { remounted: false });
        assert_eq!(app.current_page(), Page::History);
        assert_eq!(app.view_epoch, 1);
    }

    #[test]
    fn test_navigate_closes_menu_and_dropdown() {
        let mut app = test_app();
        update(&mut app, Action::ToggleMobileMenu);
        update(&mut app, Action::OpenDropdown(PageGroup::Academics));
        assert!(app.header.mobile_menu_open);
        assert_eq!(app.header.active_dropdown, Some(PageGroup::Academics));

        update(&mut app, Action::Navigate(Page::Faculties));
        assert!(!app.header.mobile_menu_open);
        assert!(app.header.active_dropdown.is_none());
        assert_eq!(app.view.group(), PageGroup::Academics);
    }

    #[test]
    fn test_dropdown_only_for_groups_with_sub_entries() {
        let mut app = test_app();
        update(&mut app, Action::OpenDropdown(PageGroup::News));
        assert!(app.header.active_dropdown.is_none());
        update(&mut app, Action::OpenDropdown(PageGroup::About));
        assert_eq!(app.header.active_dropdown, Some(PageGroup::About));
        update(&mut app, Action::CloseDropdown);
        assert!(app.header.active_dropdown.is_none());
    }

    #[test]
    fn test_set_language() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SetLanguage(Language::Uz));
        assert_eq!(effect, Effect::LanguageChanged(Language::Uz));
        assert_eq!(app.localizer.document_lang(), "uz");
        assert_eq!(app.t("header.nav.home"), "Bosh sahifa");
        assert_eq!(app.current_page(), Page::Home);
    }

    #[test]
    fn test_three_ticks_then_wrap() {
        let mut app = test_app();
        for _ in 0..3 {
            update(&mut app, Action::SlideTick { epoch: 0 });
        }
        assert_eq!(app.home().map(|h| h.slides.index()), Some(3));
        update(&mut app, Action::SlideTick { epoch: 0 });
        assert_eq!(app.home().map(|h| h.slides.index()), Some(0));
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Page::News));
        update(&mut app, Action::Navigate(Page::Home));
        assert_eq!(app.view_epoch, 2);
        update(&mut app, Action::SlideTick { epoch: 0 });
        assert_eq!(app.home().map(|h| h.slides.index()), Some(0));
    }

    #[test]
    fn test_manual_slide_controls() {
        let mut app = test_app();
        update(&mut app, Action::SlidePrev);
        assert_eq!(app.home().map(|h| h.slides.index()), Some(3));
        update(&mut app, Action::SlideSelect(1));
        update(&mut app, Action::SlideNext);
        assert_eq!(app.home().map(|h| h.slides.index()), Some(2));
        update(&mut app, Action::SlideSelect(9));
        assert_eq!(app.home().map(|h| h.slides.index()), Some(2));
    }

    #[test]
    fn test_stats_trigger_once() {
        let mut app = test_app();
        let start = Instant::now();
        update(&mut app, Action::StatsVisible(start));
        update(&mut app, Action::StatsVisible(start + Duration::from_millis(1500)));
        let home = app.home().expect("home");
        let done = start + Duration::from_millis(2000);
        let values: Vec<u32> = home.stats.iter().map(|c| c.value_at(done)).collect();
        assert_eq!(values, vec![15, 5000, 300, 50]);
        assert!(!home.counters_running(done));
    }

    #[test]
    fn test_news_category_filter() {
        let mut app = test_app();
        update(&mut app, Action::SelectNewsCategory("research".into()));
        assert!(app.news_filter().is_none(), "ignored outside the news view");

        update(&mut app, Action::Navigate(Page::News));
        assert_eq!(app.news_filter().map(|f| f.active()), Some("all"));
        update(&mut app, Action::SelectNewsCategory("research".into()));
        assert_eq!(app.news_filter().map(|f| f.active()), Some("research"));
    }

    #[test]
    fn test_audience_tab() {
        let mut app = test_app();
        update(&mut app, Action::SelectAudience("alumni".into()));
        assert_eq!(app.home().map(|h| h.audience.active()), Some("alumni"));
    }

    #[test]
    fn test_submit_then_reset() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Page::Contact));
        fill_contact(&mut app);

        let effect = update(&mut app, Action::SubmitContact);
        assert_eq!(effect, Effect::ScheduleFormReset);
        assert_eq!(app.contact_form().map(|f| f.status()), Some(FormStatus::Submitted));

        let epoch = app.view_epoch;
        update(&mut app, Action::ResetContactForm { epoch });
        let form = app.contact_form().expect("contact mounted");
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(form.name.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn test_incomplete_submit_schedules_nothing() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Page::Contact));
        type_text(&mut app, ContactField::Name, "Dilnoza");
        assert_eq!(update(&mut app, Action::SubmitContact), Effect::None);
        assert_eq!(
            app.contact_form().and_then(|f| f.focus()),
            Some(ContactField::Email)
        );
    }

    #[test]
    fn test_reset_after_leaving_contact_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Page::Contact));
        fill_contact(&mut app);
        update(&mut app, Action::SubmitContact);
        let epoch = app.view_epoch;

        update(&mut app, Action::Navigate(Page::Home));
        update(&mut app, Action::Navigate(Page::Contact));
        update(&mut app, Action::ResetContactForm { epoch });
        assert_eq!(app.view_epoch, epoch + 2);
        assert_eq!(app.contact_form().map(|f| f.status()), Some(FormStatus::Editing));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
