use billed_types::BillRecord;

use super::layout::{layout_bindings, with_layout};
use super::{escape_html, hooks, Action, Binding, EventKind, RenderContext, View, BILL_URL_ATTR};
use crate::format::{format_amount, format_date, format_status};
use crate::routes::RouteName;

/// A bill as displayed in the list
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub status: String,
    pub file_url: Option<String>,
}

impl From<&BillRecord> for BillRow {
    fn from(bill: &BillRecord) -> Self {
        Self {
            expense_type: bill.expense_type.clone(),
            name: bill.name.clone(),
            date: format_date(&bill.date),
            amount: format_amount(bill.amount),
            status: format_status(bill.status).to_string(),
            file_url: bill.file_url.clone(),
        }
    }
}

pub fn bills_ui(ctx: &RenderContext, rows: &[BillRow]) -> View {
    let body: String = rows.iter().map(row).collect();
    let content = format!(
        concat!(
            r#"<div class="content-header">"#,
            r#"<div class="content-title">Mes notes de frais</div>"#,
            r#"<button type="button" data-testid="{new_bill}" class="btn btn-primary">Nouvelle note de frais</button>"#,
            "</div>",
            r#"<div id="data-table"><table id="example" class="table table-striped">"#,
            "<thead><tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr></thead>",
            r#"<tbody data-testid="{tbody}">{body}</tbody>"#,
            "</table></div>",
            r#"<div class="modal" id="modaleFile" data-testid="{modal}"></div>"#
        ),
        new_bill = hooks::BTN_NEW_BILL,
        tbody = hooks::TBODY,
        modal = hooks::MODAL,
        body = body,
    );

    let mut bindings = layout_bindings(ctx);
    bindings.extend([
        Binding::new(hooks::BTN_NEW_BILL, EventKind::Click, Action::CreateNewBill),
        Binding::new(hooks::ICON_EYE, EventKind::Click, Action::PreviewReceipt),
        Binding::new(hooks::MODAL_CLOSE, EventKind::Click, Action::CloseOverlay),
    ]);

    View::new(with_layout(ctx, Some(RouteName::Bills), &content), bindings)
}

fn row(bill: &BillRow) -> String {
    format!(
        concat!(
            "<tr>",
            "<td>{expense_type}</td>",
            "<td>{name}</td>",
            r#"<td class="bill-date">{date}</td>"#,
            "<td>{amount}</td>",
            "<td>{status}</td>",
            r#"<td><div class="icon-actions"><div data-testid="{eye}" {attr}="{url}">&#x1F441;</div></div></td>"#,
            "</tr>"
        ),
        expense_type = escape_html(&bill.expense_type),
        name = escape_html(&bill.name),
        date = escape_html(&bill.date),
        amount = escape_html(&bill.amount),
        status = escape_html(&bill.status),
        eye = hooks::ICON_EYE,
        attr = BILL_URL_ATTR,
        url = escape_html(bill.file_url.as_deref().unwrap_or_default()),
    )
}

/// Body of the receipt overlay.
///
/// A missing reference (absent, empty or the literal `null` some records
/// carry) shows a captioned placeholder instead of a broken image.
pub fn receipt_modal(file_url: Option<&str>) -> String {
    let body = match usable_file_url(file_url) {
        Some(url) => format!(
            r#"<div class="bill-proof-container"><img src="{}" alt="Bill" /></div>"#,
            escape_html(url)
        ),
        None => concat!(
            r#"<figure class="bill-proof-missing">"#,
            "<figcaption>Aucun justificatif disponible</figcaption>",
            "</figure>"
        )
        .to_string(),
    };

    format!(
        concat!(
            r#"<div class="modal-dialog"><div class="modal-content">"#,
            r#"<div class="modal-header"><h5 class="modal-title">Justificatif</h5>"#,
            r#"<button type="button" class="close" data-testid="{close}">&times;</button></div>"#,
            r#"<div class="modal-body">{body}</div>"#,
            "</div></div>"
        ),
        close = hooks::MODAL_CLOSE,
        body = body,
    )
}

fn usable_file_url(file_url: Option<&str>) -> Option<&str> {
    file_url
        .map(str::trim)
        .filter(|url| !url.is_empty() && *url != "null")
}
