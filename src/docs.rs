use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::models::{LeaveForm, LeaveListResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Tracker",
        version = "0.1.0",
        description = r#"
## Leave Request Tracker

Submit, edit, delete, approve and reject leave requests through HTML forms.

### Notes
- Requests live in process memory and are gone after a restart.
- A request is addressed by its **position** in the list. Deleting a request
  moves every later request up by one, so positions are not stable ids.
- Approved and rejected requests are final; a second decision is refused.
- Form routes answer with `302` redirects and leave a one-shot message for
  the next page.
"#,
    ),
    paths(
        crate::api::leave_request::leave_list,
        crate::api::leave_request::add_form,
        crate::api::leave_request::create_leave,
        crate::api::leave_request::edit_form,
        crate::api::leave_request::update_leave,
        crate::api::leave_request::delete_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,

        crate::api::leave_request::leave_list_json,
        crate::api::leave_request::get_leave_json
    ),
    components(
        schemas(
            LeaveForm,
            LeaveRequest,
            LeaveStatus,
            LeaveListResponse
        )
    ),
    tags(
        (name = "Leave", description = "Leave request pages and read-only JSON"),
    )
)]
pub struct ApiDoc;
