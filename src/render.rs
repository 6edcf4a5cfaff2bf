// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use colored::Colorize;
use console::measure_text_width;

use crate::episode::Episode;
use crate::home::HomeProps;

const TITLE_WIDTH: usize = 44;
const MEMBERS_WIDTH: usize = 26;
const DATE_WIDTH: usize = 10;

/// Render the full home page: the latest releases followed by the
/// episode table.
///
/// Row markers are one-based and run through both regions, so the
/// number printed next to an episode is the position handed to the
/// player when that row is played.
pub fn render_home(props: &HomeProps) -> String {
    let mut out = String::new();

    out.push_str(&render_latest(props));
    out.push('\n');
    out.push_str(&render_table(props));

    out
}

/// The "latest releases" region: one card per episode
pub fn render_latest(props: &HomeProps) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Últimos lançamentos".bold().green()));

    if props.latest_episodes.is_empty() {
        out.push_str(&format!("  {}\n", "Nenhum episódio encontrado".dimmed()));
        return out;
    }

    for (row, episode) in props.latest_episodes.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}  {}\n",
            (row + 1).to_string().cyan(),
            episode.title.bold()
        ));
        out.push_str(&format!(
            "      {} {} {} {} {}\n",
            episode.members.dimmed(),
            "•".dimmed(),
            episode.published_at.dimmed(),
            "•".dimmed(),
            episode.duration_as_string.dimmed()
        ));
        out.push_str(&format!("      {}\n", episode.route().dimmed()));
    }

    out
}

/// The "all episodes" region: an aligned table of the remainder
pub fn render_table(props: &HomeProps) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Todos episódios".bold().green()));

    if props.all_episodes.is_empty() {
        out.push_str(&format!("  {}\n", "Nenhum episódio restante".dimmed()));
        return out;
    }

    out.push_str(&format!(
        "  {:>2}  {}  {}  {}  {}\n",
        "Nº".dimmed(),
        fit("Podcast", TITLE_WIDTH).dimmed(),
        fit("Integrantes", MEMBERS_WIDTH).dimmed(),
        fit("Data", DATE_WIDTH).dimmed(),
        "Duração".dimmed()
    ));

    for (row, episode) in props.all_episodes.iter().enumerate() {
        let marker = props.combined_index(row) + 1;
        out.push_str(&format!(
            "  {:>2}  {}  {}  {}  {}\n",
            marker.to_string().cyan(),
            fit(&episode.title, TITLE_WIDTH),
            fit(&episode.members, MEMBERS_WIDTH).dimmed(),
            fit(&episode.published_at, DATE_WIDTH),
            episode.duration_as_string
        ));
    }

    out
}

/// One-line description of a queued episode
pub fn render_now_playing(episode: &Episode) -> String {
    format!(
        "{} {} {} {}",
        "Tocando agora:".bold().green(),
        episode.title.bold(),
        "•".dimmed(),
        episode.duration_as_string.dimmed()
    )
}

/// Map a printed one-based row marker back to a combined index
pub fn resolve_row(props: &HomeProps, row: usize) -> Option<usize> {
    if row >= 1 && row <= props.len() {
        Some(row - 1)
    } else {
        None
    }
}

/// Pad `text` to `width` display columns, truncating with an ellipsis
/// when it does not fit
fn fit(text: &str, width: usize) -> String {
    let measured = measure_text_width(text);
    if measured <= width {
        return format!("{}{}", text, " ".repeat(width - measured));
    }

    let mut truncated = String::new();
    for ch in text.chars() {
        if measure_text_width(&truncated) + 1 >= width {
            break;
        }
        truncated.push(ch);
    }
    truncated.push('…');

    let padding = width.saturating_sub(measure_text_width(&truncated));
    format!("{}{}", truncated, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_episode(id: &str, title: &str) -> Episode {
        let raw = crate::api::RawEpisode {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail: "https://example.com/t.jpg".to_string(),
            members: "Diego, Tiago".to_string(),
            published_at: "2021-01-08 12:00:00".to_string(),
            file: crate::api::RawFile {
                url: format!("https://example.com/{id}.mp3"),
                file_type: None,
                duration: 3981.0,
            },
        };
        Episode::from_raw(&raw).unwrap()
    }

    fn sample_props(count: usize) -> HomeProps {
        let episodes: Vec<_> = (1..=count)
            .map(|n| make_episode(&format!("ep-{n}"), &format!("Episode {n}")))
            .collect();
        HomeProps::partition(episodes, 2)
    }

    #[test]
    fn render_home_shows_both_regions() {
        let output = render_home(&sample_props(5));

        assert!(output.contains("Últimos lançamentos"));
        assert!(output.contains("Todos episódios"));
        assert!(output.contains("Episode 1"));
        assert!(output.contains("Episode 5"));
    }

    #[test]
    fn latest_cards_carry_members_date_and_duration() {
        let output = render_latest(&sample_props(3));

        assert!(output.contains("Episode 1"));
        assert!(output.contains("Episode 2"));
        assert!(!output.contains("Episode 3"));
        assert!(output.contains("Diego, Tiago"));
        assert!(output.contains("8 jan 21"));
        assert!(output.contains("01:06:21"));
        assert!(output.contains("/episodes/ep-1"));
    }

    #[test]
    fn table_markers_continue_past_the_latest_region() {
        let output = render_table(&sample_props(5));

        // First table row is combined position 3
        assert!(output.contains(" 3 "));
        assert!(output.contains("Episode 3"));
        assert!(!output.contains("Episode 2"));
    }

    #[test]
    fn empty_regions_render_placeholders() {
        let props = HomeProps::partition(Vec::new(), 2);

        assert!(render_latest(&props).contains("Nenhum episódio encontrado"));
        assert!(render_table(&props).contains("Nenhum episódio restante"));
    }

    #[test]
    fn resolve_row_is_one_based_and_bounded() {
        let props = sample_props(5);

        assert_eq!(resolve_row(&props, 1), Some(0));
        assert_eq!(resolve_row(&props, 3), Some(2));
        assert_eq!(resolve_row(&props, 5), Some(4));
        assert_eq!(resolve_row(&props, 0), None);
        assert_eq!(resolve_row(&props, 6), None);
    }

    #[test]
    fn fit_pads_and_truncates_to_display_width() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 5), "abcd…");
        assert_eq!(measure_text_width(&fit("importância da comunidade", 10)), 10);
    }

    #[test]
    fn now_playing_names_the_episode() {
        let episode = make_episode("ep", "Faladev #30");
        let line = render_now_playing(&episode);

        assert!(line.contains("Tocando agora:"));
        assert!(line.contains("Faladev #30"));
        assert!(line.contains("01:06:21"));
    }
}
