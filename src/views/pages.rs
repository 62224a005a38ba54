use std::collections::BTreeMap;

use crate::models::profile::ProfileImages;
use crate::models::stats::{GroupWinRate, WinRateReport};
use crate::models::user::User;
use crate::models::user_match::StatLine;
use crate::views::layout::{escape_html, flash_block, page};

pub fn login(error: Option<&str>) -> String {
    let body = format!(
        r#"{error}
<form method="post" action="/login">
  <label>Email <input type="email" name="email" required></label>
  <label>Password <input type="password" name="password" required></label>
  <button type="submit">Log in</button>
</form>
<p>No account yet? <a href="/signup">Sign up</a></p>"#,
        error = flash_block(error),
    );
    page("Login", &body, false)
}

pub fn signup(flash: Option<&str>) -> String {
    let body = format!(
        r#"{flash}
<form method="post" action="/signup">
  <label>First name <input name="first_name" required></label>
  <label>Last name <input name="last_name" required></label>
  <label>Email <input type="email" name="email" required></label>
  <label>Number <input type="number" name="number" min="1" max="99" required></label>
  <label>Password <input type="password" name="password" required></label>
  <label>Confirm password <input type="password" name="confirm_password" required></label>
  <button type="submit">Sign up</button>
</form>
<p>Already registered? <a href="/login">Log in</a></p>"#,
        flash = flash_block(flash),
    );
    page("Sign up", &body, false)
}

pub fn home() -> String {
    page("Home", "<p>Pick a report from the menu above.</p>", true)
}

pub fn add_match(players: &[User], flash: Option<&str>) -> String {
    let mut rows = String::new();
    for player in players {
        rows.push_str(&format!(
            "<tr><td>{} {}</td>",
            escape_html(&player.first_name),
            escape_html(&player.last_name)
        ));
        for field in StatLine::FIELDS {
            rows.push_str(&format!(
                r#"<td><input type="number" min="0" name="{}_{}" value="0"></td>"#,
                field, player.id
            ));
        }
        rows.push_str("</tr>\n");
    }

    let headers: String = StatLine::FIELDS
        .iter()
        .map(|field| format!("<th>{}</th>", field.replace('_', " ")))
        .collect();

    let body = format!(
        r#"{flash}
<form method="post" action="/addMatches">
  <label>Home team <input name="home_team"></label>
  <label>Away team <input name="away_team"></label>
  <label>Home goals <input type="number" min="0" name="home_team_result"></label>
  <label>Away goals <input type="number" min="0" name="away_team_result"></label>
  <label>Date <input type="date" name="date"></label>
  <label>Location <input name="location"></label>
  <table>
    <thead><tr><th>Player</th>{headers}</tr></thead>
    <tbody>
{rows}    </tbody>
  </table>
  <button type="submit">Save match</button>
</form>"#,
        flash = flash_block(flash),
        headers = headers,
        rows = rows,
    );
    page("Add match", &body, true)
}

fn group_table(caption: &str, key_header: &str, groups: &BTreeMap<String, GroupWinRate>) -> String {
    let rows: String = groups
        .iter()
        .map(|(key, group)| {
            format!(
                "<tr><td>{}</td><td>{:.2}%</td><td>{}</td></tr>\n",
                escape_html(key),
                group.win_rate,
                group.total_matches
            )
        })
        .collect();
    format!(
        r#"<table>
  <caption>{caption}</caption>
  <thead><tr><th>{key_header}</th><th>Win rate</th><th>Matches</th></tr></thead>
  <tbody>
{rows}  </tbody>
</table>"#,
        caption = caption,
        key_header = key_header,
        rows = rows,
    )
}

pub fn win_rate(report: &WinRateReport) -> String {
    let body = format!(
        "<p class=\"overall\">Overall win rate: {:.2}%</p>\n{}\n{}",
        report.overall_win_rate,
        group_table("By location", "Location", &report.location_win_rates),
        group_table("By opponent", "Opponent", &report.away_team_win_rates),
    );
    page("Win rate", &body, true)
}

pub fn profile(user: &User, images: ProfileImages) -> String {
    let body = format!(
        r#"<section class="profile">
  <img class="outline" src="/static/{outline}" alt="">
  <img class="shirt" src="/static/{shirt}" alt="Shirt number {number}">
  <p>{first} {last}</p>
  <p>Number {number}</p>
  <p>{email}</p>
</section>"#,
        outline = images.outline_image,
        shirt = images.profile_image,
        number = user.number,
        first = escape_html(&user.first_name),
        last = escape_html(&user.last_name),
        email = escape_html(&user.email),
    );
    page("Profile", &body, true)
}

pub fn playtime() -> String {
    let body = r#"<label>Year <select id="year"></select></label>
<table><thead><tr><th>Month</th><th>Matches</th></tr></thead><tbody id="months"></tbody></table>
<script>
async function loadMonths(year) {
  const rows = await (await fetch('/getPlayTimeData?year=' + year)).json();
  const body = document.getElementById('months');
  body.replaceChildren(...rows.map(r => {
    const tr = document.createElement('tr');
    tr.innerHTML = '<td></td><td></td>';
    tr.children[0].textContent = r.month;
    tr.children[1].textContent = r.count;
    return tr;
  }));
}
(async () => {
  const years = await (await fetch('/getYears')).json();
  const select = document.getElementById('year');
  years.forEach(y => select.add(new Option(y, y)));
  select.addEventListener('change', () => loadMonths(select.value));
  if (years.length) loadMonths(years[years.length - 1]);
})();
</script>"#;
    page("Play time", body, true)
}

pub fn stats() -> String {
    let body = r#"<table><thead><tr>
<th>Player</th><th>Goals</th><th>Shots</th><th>On target</th><th>Passes</th><th>Fouls</th><th>Yellow</th><th>Red</th>
</tr></thead><tbody id="players"></tbody></table>
<script>
(async () => {
  const rows = await (await fetch('/getStats')).json();
  const keys = ['total_goals', 'total_shots', 'total_shots_on_target', 'total_passes',
                'total_fouls', 'total_yellow_cards', 'total_red_cards'];
  document.getElementById('players').replaceChildren(...rows.map(r => {
    const tr = document.createElement('tr');
    if (r.is_current_user) tr.className = 'me';
    const name = document.createElement('td');
    name.textContent = r.first_name + ' ' + r.last_name;
    tr.appendChild(name);
    keys.forEach(k => { const td = document.createElement('td'); td.textContent = r[k]; tr.appendChild(td); });
    return tr;
  }));
})();
</script>"#;
    page("Stats", body, true)
}

pub fn match_history() -> String {
    let body = r#"<table><thead><tr>
<th>Date</th><th>Home</th><th>Score</th><th>Away</th><th>Location</th>
</tr></thead><tbody id="matches"></tbody></table>
<script>
(async () => {
  const rows = await (await fetch('/getMatches')).json();
  document.getElementById('matches').replaceChildren(...rows.map(m => {
    const tr = document.createElement('tr');
    [m.date, m.home_team, m.home_team_result + ' - ' + m.away_team_result, m.away_team, m.location]
      .forEach(v => { const td = document.createElement('td'); td.textContent = v ?? ''; tr.appendChild(td); });
    return tr;
  }));
})();
</script>"#;
    page("Match history", body, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_rate_page_lists_every_group() {
        let mut location_win_rates = BTreeMap::new();
        location_win_rates.insert("StadiumX".to_string(), GroupWinRate { win_rate: 100.0, total_matches: 1 });
        let mut away_team_win_rates = BTreeMap::new();
        away_team_win_rates.insert("<Team C>".to_string(), GroupWinRate { win_rate: 0.0, total_matches: 1 });
        let report = WinRateReport {
            overall_win_rate: 50.0,
            location_win_rates,
            away_team_win_rates,
        };

        let html = win_rate(&report);
        assert!(html.contains("Overall win rate: 50.00%"));
        assert!(html.contains("<td>StadiumX</td><td>100.00%</td><td>1</td>"));
        assert!(html.contains("&lt;Team C&gt;"));
    }

    #[test]
    fn add_match_form_has_a_field_per_player_and_stat() {
        let players = vec![User {
            id: 4,
            first_name: "Bob".into(),
            last_name: "Smith".into(),
            email: "bob@example.com".into(),
            number: 7,
            password: String::new(),
        }];
        let html = add_match(&players, None);
        for field in StatLine::FIELDS {
            assert!(html.contains(&format!(r#"name="{}_4""#, field)));
        }
    }
}
