use globus_shared::{CountryRecord, FavoriteEntry, Locale};

use super::{Element, ViewTree, COUNTRY_BLOCK_ID, FAVORITES_LIST_ID, GET_COUNTRY_ID, MESSAGE_ID};
use crate::events::Action;
use crate::state::AppState;
use crate::status::Status;

/// Build the full view for `state`. Every region is rebuilt from scratch.
pub fn render(state: &AppState, locale: Locale) -> ViewTree {
    let text = locale.messages();

    let root = Element::new("main")
        .class("app")
        .child(
            Element::new("button")
                .id(GET_COUNTRY_ID)
                .on_click(Action::GetCountry)
                .child(text.get_country),
        )
        .child(render_country(state.current.as_ref(), locale))
        .child(render_favorites(state.favorites.entries(), locale))
        .child(render_status(&state.status));

    ViewTree { root }
}

/// The country display region; empty until a country has been picked.
pub fn render_country(country: Option<&CountryRecord>, locale: Locale) -> Element {
    let block = Element::new("section").id(COUNTRY_BLOCK_ID);
    let Some(country) = country else {
        return block;
    };
    let text = locale.messages();

    let population = match country.population {
        Some(n) => locale.format_number(n),
        None => text.unknown.to_string(),
    };

    let info = Element::new("div")
        .class("country-info")
        .child(Element::new("strong").class("name").child(country.name.as_str()))
        .child(
            Element::new("div")
                .class("country-details")
                .child(Element::new("p").child(format!("{}: {}", text.capital_label, country.capital)))
                .child(Element::new("p").child(format!("{}: {}", text.population_label, population))),
        )
        .child(
            Element::new("div").class("actions").child(
                Element::new("button")
                    .on_click(Action::AddFavorite)
                    .child(text.add_to_favorites),
            ),
        );

    let mut content = Element::new("div").class("country-content").child(info);

    if !country.flag.is_empty() {
        content = content.child(
            Element::new("div").class("country-flag").child(
                Element::new("img")
                    .attr("alt", text.flag_alt(&country.name))
                    .attr("src", country.flag.as_str())
                    .attr("loading", "lazy"),
            ),
        );
    }

    block.child(content)
}

/// The favorites region: a placeholder row when empty, else one row per entry.
pub fn render_favorites(entries: &[FavoriteEntry], locale: Locale) -> Element {
    let list = Element::new("ul").id(FAVORITES_LIST_ID);
    let text = locale.messages();

    if entries.is_empty() {
        return list.child(Element::new("li").class("empty").child(text.empty));
    }

    list.children(entries.iter().map(|entry| {
        Element::new("li")
            .child(
                Element::new("div")
                    .class("favorite-info")
                    .child(Element::new("strong").child(entry.name.as_str()))
                    .child(Element::new("div").class("small").child(format!(
                        "{}: {}",
                        text.added_label,
                        locale.format_timestamp(&entry.added_at)
                    ))),
            )
            .child(
                Element::new("button")
                    .on_click(Action::RemoveFavorite(entry.name.clone()))
                    .child(text.remove),
            )
    }))
}

pub fn render_status(status: &Status) -> Element {
    Element::new("div")
        .id(MESSAGE_ID)
        .attr("data-severity", status.severity.as_str())
        .attr("style", status.severity.style().to_css())
        .child(status.text.as_str())
}
