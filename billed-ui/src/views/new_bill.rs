use billed_types::BILL_DATE_FORMAT;

use super::layout::{layout_bindings, with_layout};
use super::{hooks, Action, Binding, EventKind, RenderContext, View};
use crate::routes::RouteName;

pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Label shown next to the file input once a receipt is accepted
pub const FILE_ACCEPTED_TEXT: &str = "Justificatif accepté";
/// Label shown when the picked file is not a jpg, jpeg or png image
pub const FILE_REJECTED_TEXT: &str = "Format non accepté : jpg, jpeg ou png uniquement";

pub fn new_bill_ui(ctx: &RenderContext) -> View {
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|t| format!("<option>{t}</option>"))
        .collect();
    let max_date = ctx.today.format(BILL_DATE_FORMAT);

    let content = format!(
        concat!(
            r#"<div class="content-header"><div class="content-title">Envoyer une note de frais</div></div>"#,
            r#"<div class="form-newbill-container content-inner">"#,
            r#"<form data-testid="{form}">"#,
            r#"<div class="col-half">"#,
            r#"<label for="expense-type" class="bold-label">Type de dépense</label>"#,
            r#"<select required class="form-control blue-border" data-testid="{expense_type}" name="type">{options}</select>"#,
            r#"<label for="expense-name" class="bold-label">Nom de la dépense</label>"#,
            r#"<input required type="text" class="form-control blue-border" data-testid="{expense_name}" name="name" placeholder="Vol Paris Londres" />"#,
            r#"<label for="datepicker" class="bold-label">Date</label>"#,
            r#"<input required type="date" max="{max_date}" class="form-control blue-border" data-testid="{datepicker}" name="date" />"#,
            r#"<label for="amount" class="bold-label">Montant TTC</label>"#,
            r#"<input required type="number" step="0.01" min="0" class="form-control blue-border input-icon input-icon-right" data-testid="{amount}" name="amount" placeholder="348" />"#,
            r#"<label for="vat" class="bold-label">TVA</label>"#,
            r#"<input required type="number" class="form-control blue-border" data-testid="{vat}" name="vat" placeholder="70" />"#,
            r#"<label for="pct" class="bold-label">%</label>"#,
            r#"<input type="number" class="form-control blue-border" data-testid="{pct}" name="pct" placeholder="20" />"#,
            "</div>",
            r#"<div class="col-half">"#,
            r#"<label for="commentary" class="bold-label">Commentaire</label>"#,
            r#"<textarea required class="form-control blue-border" data-testid="{commentary}" name="commentary" rows="3"></textarea>"#,
            r#"<label for="file" class="bold-label">Justificatif</label>"#,
            r#"<input required type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="{file}" name="file" />"#,
            r#"<span class="file-status" data-testid="{file_status}"></span>"#,
            "</div>",
            r#"<div class="col-half"><button type="submit" id="btn-send-bill" class="btn btn-primary">Envoyer</button></div>"#,
            r#"<div class="submit-error" data-testid="{submit_error}" role="alert"></div>"#,
            "</form></div>"
        ),
        form = hooks::FORM_NEW_BILL,
        expense_type = hooks::EXPENSE_TYPE,
        options = options,
        expense_name = hooks::EXPENSE_NAME,
        max_date = max_date,
        datepicker = hooks::DATEPICKER,
        amount = hooks::AMOUNT,
        vat = hooks::VAT,
        pct = hooks::PCT,
        commentary = hooks::COMMENTARY,
        file = hooks::FILE,
        file_status = hooks::FILE_STATUS,
        submit_error = hooks::SUBMIT_ERROR,
    );

    let mut bindings = layout_bindings(ctx);
    bindings.extend([
        Binding::new(hooks::FILE, EventKind::Change, Action::SelectFile),
        Binding::new(hooks::FORM_NEW_BILL, EventKind::Submit, Action::SubmitBill),
    ]);

    View::new(with_layout(ctx, Some(RouteName::NewBill), &content), bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::employee_context;

    #[test]
    fn exposes_every_form_hook() {
        let view = new_bill_ui(&employee_context());
        for hook in [
            hooks::FORM_NEW_BILL,
            hooks::EXPENSE_TYPE,
            hooks::EXPENSE_NAME,
            hooks::DATEPICKER,
            hooks::AMOUNT,
            hooks::VAT,
            hooks::PCT,
            hooks::COMMENTARY,
            hooks::FILE,
            hooks::FILE_STATUS,
            hooks::SUBMIT_ERROR,
        ] {
            assert!(
                view.markup.contains(&format!(r#"data-testid="{hook}""#)),
                "missing hook {hook}"
            );
        }
        assert!(view.markup.contains("Envoyer une note de frais"));
    }

    #[test]
    fn highlights_mail_icon() {
        let view = new_bill_ui(&employee_context());
        assert!(view.markup.contains(r#"data-testid="icon-mail" class="active-icon""#));
        assert_eq!(view.markup.matches("active-icon").count(), 1);
    }

    #[test]
    fn date_picker_stops_at_today() {
        let view = new_bill_ui(&employee_context());
        assert!(view.markup.contains(r#"max="2022-04-01""#));
    }

    #[test]
    fn pct_may_be_left_empty() {
        let view = new_bill_ui(&employee_context());
        let pct = format!(r#"data-testid="{}""#, hooks::PCT);
        let start = view.markup[..view.markup.find(&pct).unwrap()]
            .rfind("<input")
            .unwrap();
        let tag = &view.markup[start..start + view.markup[start..].find('>').unwrap()];
        assert!(!tag.contains("required"));
        assert!(view.markup.contains(r#"<label for="pct""#));
    }

    #[test]
    fn binds_file_and_submit() {
        let view = new_bill_ui(&employee_context());
        assert_eq!(
            view.action_for(hooks::FILE, EventKind::Change),
            Some(Action::SelectFile)
        );
        assert_eq!(
            view.action_for(hooks::FORM_NEW_BILL, EventKind::Submit),
            Some(Action::SubmitBill)
        );
    }
}
