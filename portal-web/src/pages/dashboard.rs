use crate::components::nav_link::NavLink;
use crate::components::section_nav::SectionNav;
use crate::i18n::{t, tr1};
use portal_core::{DEFAULT_SECTION, Page, Role, is_known_section, sections_for};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DashboardPageProps {
    pub role: Role,
    pub display_name: AttrValue,
    pub section: AttrValue,
    pub on_select_section: Callback<String>,
    pub on_navigate: Callback<Page>,
}

/// Section id actually rendered. Unknown ids (stale preference cookies, another role's
/// section) show the overview.
#[must_use]
pub fn effective_section(role: Role, section: &str) -> &'static str {
    sections_for(role)
        .iter()
        .find(|s| s.id == section)
        .map_or(DEFAULT_SECTION, |s| s.id)
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let active = effective_section(props.role, &props.section);
    let body = if active == DEFAULT_SECTION {
        t("dashboard.overview")
    } else {
        t(&format!("dashboard.sections.{active}"))
    };
    let stale = !is_known_section(props.role, &props.section);

    html! {
        <section class="dashboard" data-testid="dashboard-page" data-role={props.role.as_str()} data-section={active}>
            <aside>
                <SectionNav role={props.role} active={AttrValue::from(active)} on_select={props.on_select_section.clone()} />
            </aside>
            <div class="dashboard-body">
                <h1>{ tr1("dashboard.greeting", "name", &props.display_name) }</h1>
                <p class="muted">{ tr1("dashboard.role", "role", props.role.label()) }</p>
                if stale {
                    <p class="notice">{ t("dashboard.unknown_section") }</p>
                }
                <div class="panel">{ body }</div>
                <NavLink page={Page::Profile(props.role)} label={t("nav.profile")} on_navigate={props.on_navigate.clone()} />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sections_show_the_overview() {
        assert_eq!(effective_section(Role::Student, "fees"), "fees");
        assert_eq!(effective_section(Role::Faculty, "fees"), DEFAULT_SECTION);
        assert_eq!(effective_section(Role::Admin, ""), DEFAULT_SECTION);
    }
}
