use crate::api::leave_request;
use crate::docs::ApiDoc;
use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Swagger UI plus its OpenAPI document.
///
/// `NormalizePath::trim()` turns `/swagger-ui/` into `/swagger-ui`, which the
/// UI's `{_:.*}` pattern does not match, so that path is redirected explicitly.
pub fn configure_docs(cfg: &mut web::ServiceConfig) {
    cfg.service(web::redirect("/swagger-ui", "/swagger-ui/index.html"))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}") // ← wildcard {_:.*} to match JS/CSS files
                .url("/api-doc/openapi.json", ApiDoc::openapi()),
        );
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // HTML pages; positions index straight into the store
    cfg.service(web::resource("/").route(web::get().to(leave_request::leave_list)))
        .service(
            web::resource("/add")
                .route(web::get().to(leave_request::add_form))
                .route(web::post().to(leave_request::create_leave)),
        )
        .service(
            web::resource("/edit/{position}")
                .route(web::get().to(leave_request::edit_form))
                .route(web::post().to(leave_request::update_leave)),
        )
        .service(web::resource("/delete/{position}").route(web::get().to(leave_request::delete_leave)))
        .service(web::resource("/approve/{position}").route(web::get().to(leave_request::approve_leave)))
        .service(web::resource("/reject/{position}").route(web::get().to(leave_request::reject_leave)));

    // Read-only JSON
    cfg.service(
        web::scope("/api/leave")
            // /api/leave
            .service(web::resource("").route(web::get().to(leave_request::leave_list_json)))
            // /api/leave/{position}
            .service(web::resource("/{position}").route(web::get().to(leave_request::get_leave_json))),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LeaveStore;
    use actix_web::http::{StatusCode, header};
    use actix_web::middleware::NormalizePath;
    use actix_web::{App, test, web::Data};

    #[actix_web::test]
    async fn swagger_ui_is_reachable_with_or_without_trailing_slash() {
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(Data::new(LeaveStore::new()))
                .configure(configure_docs)
                .configure(configure),
        )
        .await;

        for uri in ["/swagger-ui/", "/swagger-ui"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert!(res.status().is_redirection(), "{uri}: {}", res.status());
            assert_eq!(
                res.headers().get(header::LOCATION).unwrap(),
                "/swagger-ui/index.html"
            );
        }

        let req = test::TestRequest::get().uri("/swagger-ui/index.html").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api-doc/openapi.json").to_request();
        let doc: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(doc["paths"]["/add"].is_object());
    }

    #[actix_web::test]
    async fn trimmed_app_still_serves_pages() {
        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(Data::new(LeaveStore::new()))
                .configure(configure_docs)
                .configure(configure),
        )
        .await;

        for uri in ["/", "/add/", "/api/leave/"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
        }
    }
}
