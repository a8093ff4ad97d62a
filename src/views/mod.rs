//! Server-rendered HTML pages.

use crate::models::ContactSubmission;
use crate::utils::flash::Flash;

const SITE_NAME: &str = "Papa-Léguas Topografia";

const STYLESHEET: &str = "body{font-family:sans-serif;margin:0;color:#222}\
header,main,footer{max-width:960px;margin:0 auto;padding:1rem}\
.flash{padding:.75rem 1rem;border-radius:4px}\
.flash-success{background:#e3f4e1;color:#1d5c1a}\
.flash-error{background:#fbe4e4;color:#8a1c1c}\
form label{display:block;margin-top:.75rem}\
form input,form select,form textarea{width:100%;padding:.4rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4rem;text-align:left;vertical-align:top}";

/// Service options offered in the contact form, as (value, label).
const SERVICE_OPTIONS: [(&str, &str); 4] = [
    ("medicao", "Medição de terrenos"),
    ("georreferenciamento", "Georreferenciamento"),
    ("legalizacao", "Legalização de imóveis"),
    ("completo", "Serviço completo"),
];

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<style>{style}</style>
</head>
<body>
<header><a href="/"><strong>{site}</strong></a></header>
<main>
{body}
</main>
<footer><small>&copy; {site}</small></footer>
</body>
</html>"#,
        title = escape_html(title),
        site = SITE_NAME,
        style = STYLESHEET,
        body = body,
    )
}

fn render_flash(flash: Option<&Flash>) -> String {
    match flash {
        Some(flash) => format!(
            r#"<p class="flash flash-{}" role="status">{}</p>"#,
            flash.category.as_str(),
            escape_html(&flash.message)
        ),
        None => String::new(),
    }
}

pub fn home_page(flash: Option<&Flash>) -> String {
    let options: String = SERVICE_OPTIONS
        .iter()
        .map(|(value, label)| format!(r#"<option value="{}">{}</option>"#, value, label))
        .collect();

    let body = format!(
        r#"{flash}
<section>
<h1>Topografia e regularização de imóveis</h1>
<p>Medição de terrenos, georreferenciamento de imóveis rurais e legalização de propriedades urbanas e rurais.</p>
</section>
<section id="contato">
<h2>Fale conosco</h2>
<form method="post" action="/contact">
<label>Nome *<input name="name" maxlength="100" required></label>
<label>E-mail *<input name="email" type="email" maxlength="120" required></label>
<label>Telefone<input name="phone" maxlength="20"></label>
<label>Serviço<select name="service_type"><option value="">Selecione</option>{options}</select></label>
<label>Mensagem *<textarea name="message" rows="5" required></textarea></label>
<p><button type="submit">Enviar</button></p>
</form>
</section>"#,
        flash = render_flash(flash),
        options = options,
    );

    layout("Início", &body)
}

pub fn submissions_page(submissions: &[ContactSubmission]) -> String {
    let rows: String = if submissions.is_empty() {
        r#"<tr><td colspan="8">Nenhuma mensagem recebida.</td></tr>"#.to_string()
    } else {
        submissions.iter().map(submission_row).collect()
    };

    let body = format!(
        r#"<h1>Mensagens recebidas ({count})</h1>
<table>
<thead><tr><th>Data</th><th>Nome</th><th>E-mail</th><th>Telefone</th><th>Serviço</th><th>Mensagem</th><th>Status</th><th>Notas</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>"#,
        count = submissions.len(),
        rows = rows,
    );

    layout("Mensagens", &body)
}

fn submission_row(submission: &ContactSubmission) -> String {
    let optional = |value: &Option<String>| escape_html(value.as_deref().unwrap_or(""));

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        submission.created_at.format("%d/%m/%Y %H:%M"),
        escape_html(&submission.name),
        escape_html(&submission.email),
        optional(&submission.phone),
        optional(&submission.service_type),
        escape_html(&submission.message),
        submission.status,
        optional(&submission.notes),
    )
}

pub fn not_found_page() -> String {
    layout(
        "Página não encontrada",
        r#"<h1>Página não encontrada</h1><p><a href="/">Voltar para o início</a></p>"#,
    )
}

pub fn bad_request_page() -> String {
    layout(
        "Requisição inválida",
        r#"<h1>Requisição inválida</h1><p><a href="/">Voltar para o início</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    layout(
        "Erro interno",
        r#"<h1>Erro interno</h1><p>Ocorreu um erro inesperado. Tente novamente mais tarde.</p><p><a href="/">Voltar para o início</a></p>"#,
    )
}
