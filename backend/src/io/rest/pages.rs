//! # HTML Pages
//!
//! Server-rendered Bootstrap pages. Every value that came from a user passes
//! through [`escape_html`] before it reaches the markup.

use shared::{Donation, Novena};
use std::fmt::Write;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap `content` in the shared page shell with the navigation bar
fn layout(title: &str, head_extra: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link href="{css}" rel="stylesheet">
    {head_extra}
</head>
<body>
    <nav class="navbar navbar-expand-lg navbar-light bg-light">
        <div class="container">
            <a class="navbar-brand" href="/">Novena App</a>
            <ul class="navbar-nav ml-auto">
                <li class="nav-item"><a class="nav-link" href="/novena-cad">Cadastrar Novena</a></li>
                <li class="nav-item"><a class="nav-link" href="/donation-cad">Cadastrar Doação</a></li>
                <li class="nav-item"><a class="nav-link" href="/list">Ver Doações</a></li>
            </ul>
        </div>
    </nav>
    <div class="container mt-4">
        {content}
    </div>
    <script src="{js}"></script>
</body>
</html>
"#,
        title = escape_html(title),
        css = BOOTSTRAP_CSS,
        js = BOOTSTRAP_JS,
        head_extra = head_extra,
        content = content,
    )
}

pub fn home_page() -> String {
    layout("Novena App", "", r#"<h1 class="mb-4">Bem vindo!</h1>"#)
}

/// Novena registration form, optionally preceded by a status message
pub fn novena_form_page(message: Option<&str>) -> String {
    let content = format!(
        r#"{alert}<h1 class="mb-4">Cadastro da Novena</h1>
        <form method="post" action="/novena-cad">
            <label for="novena">Novena:</label>
            <input type="text" id="novena" name="novena" required class="form-control mb-2">
            <label for="dateinicio">Data Inicio:</label>
            <input type="date" id="dateinicio" name="dateinicio" required class="form-control mb-2">
            <label for="datefim">Data Fim:</label>
            <input type="date" id="datefim" name="datefim" required class="form-control mb-2">
            <input type="submit" value="Cadastrar" class="btn btn-primary">
        </form>"#,
        alert = alert(message),
    );
    layout("Cadastro da Novena", "", &content)
}

/// Donation registration form, optionally preceded by a status message
pub fn donation_form_page(message: Option<&str>) -> String {
    let content = format!(
        r#"{alert}<h1 class="mb-4">Cadastro de Doação</h1>
        <form method="post" action="/donation-cad">
            <label for="novena">Novena:</label>
            <input type="text" id="novena" name="novena" required class="form-control mb-2">
            <label for="name">Nome:</label>
            <input type="text" id="name" name="name" required class="form-control mb-2">
            <label for="donation">Doação:</label>
            <input type="text" id="donation" name="donation" required class="form-control mb-2">
            <label for="date">Data:</label>
            <input type="date" id="date" name="date" required class="form-control mb-2">
            <input type="submit" value="Cadastrar" class="btn btn-primary">
        </form>"#,
        alert = alert(message),
    );
    layout("Cadastro de Doação", "", &content)
}

/// Every novena with a collapsible list of its donations
pub fn novena_list_page(novenas: &[Novena]) -> String {
    let head_extra = r#"<style>
        .toggle-list { cursor: pointer; text-decoration: underline; color: blue; }
        .hidden { display: none; }
    </style>
    <script>
        function toggleList(id) {
            document.getElementById("list-" + id).classList.toggle("hidden");
        }
    </script>"#;

    let mut content = String::from(r#"<h1 class="mb-4">Lista de Doações</h1>"#);
    if novenas.is_empty() {
        content.push_str(r#"<p class="text-muted">Nenhuma novena cadastrada.</p>"#);
    }
    for novena in novenas {
        let _ = write!(
            content,
            r#"
        <h2>
            <span class="toggle-list" onclick="toggleList({id})">Novena (ID {id}): <strong>{name}</strong> - Inicio: {start} - Fim: {end}</span>
            <a href="/print-novena/{id}" class="btn btn-secondary btn-sm ml-2">visualizar</a>
        </h2>
        <ul id="list-{id}" class="hidden">{donations}
        </ul>"#,
            id = novena.id,
            name = escape_html(&novena.name),
            start = escape_html(&novena.start_date),
            end = escape_html(&novena.end_date),
            donations = donation_items(&novena.donations),
        );
    }

    layout("Lista de Doações", head_extra, &content)
}

/// Printable page for a single novena
pub fn novena_print_page(novena: &Novena) -> String {
    let name = escape_html(&novena.name);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Impressão da Novena - {name}</title>
    <link href="{css}" rel="stylesheet">
</head>
<body>
    <div class="container mt-4">
        <h1 class="mb-4">Novena - {name}</h1>
        <h2>Início: {start} - Fim: {end}</h2>
        <ul>{donations}
        </ul>
    </div>
    <div class="container mt-4">
        <button class="btn btn-primary" id="printButton" onclick="printPage()">Imprimir</button>
        <a href="/list" class="btn btn-secondary" id="voltarButton">Voltar</a>
    </div>
    <script src="{js}"></script>
    <script>
        function printPage() {{
            var printButton = document.getElementById("printButton");
            var voltarButton = document.getElementById("voltarButton");
            printButton.style.display = "none";
            voltarButton.style.display = "none";
            window.print();
            setTimeout(() => {{
                printButton.style.display = "block";
                voltarButton.style.display = "block";
            }}, 200);
        }}
    </script>
</body>
</html>
"#,
        name = name,
        start = escape_html(&novena.start_date),
        end = escape_html(&novena.end_date),
        donations = donation_items(&novena.donations),
        css = BOOTSTRAP_CSS,
        js = BOOTSTRAP_JS,
    )
}

fn donation_items(donations: &[Donation]) -> String {
    let mut items = String::new();
    for donation in donations {
        let _ = write!(
            items,
            r#"
            <li>
                <strong>Nome:</strong> {name},
                <strong>Doação:</strong> {amount},
                <strong>Data:</strong> {date}
            </li>"#,
            name = escape_html(&donation.contributor_name),
            amount = escape_html(&donation.amount),
            date = escape_html(&donation.date),
        );
    }
    items
}

fn alert(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            r#"<div class="alert alert-success" role="alert">{}</div>
        "#,
            escape_html(message)
        ),
        None => String::new(),
    }
}
