use rsurvey::forms::{LoginForm, SignupForm, SurveyForm, TicketForm};
use rsurvey::models::{Question, Satisfaction};
use rsurvey::ui::prompt::fill_missing;
use serde_json::json;
use std::io::Cursor;

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

#[test]
fn test_login_requires_both_fields() {
    let errs = LoginForm {
        email: s("  "),
        password: None,
    }
    .validate()
    .unwrap_err();
    assert!(errs.has("email"));
    assert!(errs.has("password"));
    assert!(errs.to_string().starts_with("Invalid form:"));

    let req = LoginForm {
        email: s(" ana@example.com "),
        password: s("secret"),
    }
    .validate()
    .unwrap();
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({"email": "ana@example.com", "password": "secret"})
    );
}

#[test]
fn test_signup_checks_email_and_confirmation() {
    let mut form = SignupForm {
        name: s("Ana"),
        last_name: s("Souza"),
        email: s("not-an-email"),
        password: s("abc"),
        confirm_password: s("abd"),
    };
    let errs = form.validate().unwrap_err();
    assert!(errs.has("email"));
    assert!(errs.to_string().contains("Passwords do not match"));

    form.email = s("ana@example.com");
    form.confirm_password = s("abc");
    let body = serde_json::to_value(form.validate().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({"name": "Ana", "last_name": "Souza", "email": "ana@example.com", "password": "abc"})
    );
}

#[test]
fn test_ticket_form_carries_attendant_id() {
    let form = TicketForm {
        kind: s("Troca de senha"),
        register: s("R-100"),
    };
    let body = serde_json::to_value(form.validate(Some(7)).unwrap()).unwrap();
    assert_eq!(
        body,
        json!({"type": "Troca de senha", "register": "R-100", "id_attendant": 7})
    );

    let errs = form.validate(None).unwrap_err();
    assert!(errs.has("id_attendant"));

    let errs = TicketForm::default().validate(Some(7)).unwrap_err();
    assert!(errs.has("type"));
    assert!(errs.has("register"));
}

#[test]
fn test_survey_requires_every_answer() {
    let mut form = SurveyForm::new(12);
    form.answer(Question::Tempo, Satisfaction::Neutro);
    let errs = form.validate().unwrap_err();
    assert_eq!(errs.errors.len(), 3);
    assert!(!errs.has("tempo"));

    assert!(SurveyForm::new(0).validate().unwrap_err().has("id_service"));
}

#[test]
fn test_survey_body_lists_questions_in_fixed_order() {
    let mut form = SurveyForm::new(12);
    form.answer(Question::Postura, Satisfaction::PoucoSatisfeito);
    form.answer(Question::Solucao, Satisfaction::Satisfeito);
    form.answer(Question::Atendimento, Satisfaction::MuitoSatisfeito);
    form.answer(Question::Tempo, Satisfaction::LigeiramenteSatisfeito);

    let body = serde_json::to_value(form.validate().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({
            "id_service": 12,
            "questions": [
                {"question": "atendimento", "answer": "muito_satisfeito"},
                {"question": "tempo", "answer": "ligeiramente_satisfeito"},
                {"question": "solucao", "answer": "satisfeito"},
                {"question": "postura", "answer": "pouco_satisfeito"}
            ]
        })
    );
}

#[test]
fn test_prompt_fills_missing_answers() {
    let mut form = SurveyForm::new(5);
    form.answer(Question::Atendimento, Satisfaction::Neutro);

    // "9" is rejected and asked again; keys are accepted as well as numbers
    let mut input = Cursor::new("9\n1\nneutro\n5\n");
    let mut out = Vec::new();
    fill_missing(&mut form, &mut input, &mut out).unwrap();

    assert!(form.missing().is_empty());
    assert_eq!(form.get(Question::Tempo), Some(Satisfaction::MuitoSatisfeito));
    assert_eq!(form.get(Question::Solucao), Some(Satisfaction::Neutro));
    assert_eq!(form.get(Question::Postura), Some(Satisfaction::PoucoSatisfeito));

    let shown = String::from_utf8(out).unwrap();
    assert!(shown.contains("Em relação ao tempo de atendimento"));
    assert!(shown.contains("Invalid choice '9'"));
    assert!(!shown.contains("Qual foi seu grau de satisfação"));
}

#[test]
fn test_prompt_end_of_input_is_an_error() {
    let mut form = SurveyForm::new(5);
    let mut input = Cursor::new("2\n");
    let mut out = Vec::new();
    let err = fill_missing(&mut form, &mut input, &mut out).unwrap_err();
    assert!(err.to_string().contains("tempo"));
    assert_eq!(
        form.get(Question::Atendimento),
        Some(Satisfaction::LigeiramenteSatisfeito)
    );
}
