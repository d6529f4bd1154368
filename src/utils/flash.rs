use actix_web::cookie::Cookie;
use actix_web::http::header::{self, ContentType};
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use futures::future::{Ready, ready};
use strum::{AsRefStr, Display, EnumString};

pub const FLASH_COOKIE: &str = "leave_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FlashLevel {
    Error,
    Success,
    Info,
}

/// Every message a handler can leave for the next page.
///
/// Only the variant name travels in the cookie, so the shown text is always
/// one of the fixed strings below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Notice {
    Submitted,
    Updated,
    Deleted,
    Approved,
    Rejected,
    NotFound,
    AlreadyDecided,
    MissingFields,
    BadDateFormat,
    BadDateRange,
}

impl Notice {
    pub fn level(self) -> FlashLevel {
        match self {
            Notice::Submitted | Notice::Updated | Notice::Approved => FlashLevel::Success,
            Notice::Deleted | Notice::Rejected => FlashLevel::Info,
            Notice::NotFound
            | Notice::AlreadyDecided
            | Notice::MissingFields
            | Notice::BadDateFormat
            | Notice::BadDateRange => FlashLevel::Error,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Notice::Submitted => "Leave request submitted successfully!",
            Notice::Updated => "Leave request updated successfully!",
            Notice::Deleted => "Leave request deleted.",
            Notice::Approved => "Leave request approved.",
            Notice::Rejected => "Leave request rejected.",
            Notice::NotFound => "Leave request not found!",
            Notice::AlreadyDecided => "Leave request has already been processed.",
            Notice::MissingFields => "All fields are required!",
            Notice::BadDateFormat => "Invalid date format! Use YYYY-MM-DD.",
            Notice::BadDateRange => "End date cannot be before start date!",
        }
    }
}

/// A message as the view layer renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: &'static str,
}

impl From<Notice> for Flash {
    fn from(notice: Notice) -> Self {
        Flash {
            level: notice.level(),
            text: notice.text(),
        }
    }
}

/// The message left by the previous response, if any.
pub struct IncomingFlash {
    notice: Option<Notice>,
    // set even when the value was not a known notice, so it still gets cleared
    has_cookie: bool,
}

impl IncomingFlash {
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn flash(&self) -> Option<Flash> {
        self.notice().map(Flash::from)
    }
}

impl FromRequest for IncomingFlash {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let cookie = req.cookie(FLASH_COOKIE);
        let notice = cookie
            .as_ref()
            .and_then(|c| c.value().parse::<Notice>().ok());
        ready(Ok(IncomingFlash {
            notice,
            has_cookie: cookie.is_some(),
        }))
    }
}

/// 302 to `location`, leaving `notice` for the page rendered there.
pub fn redirect(location: &str, notice: Option<Notice>) -> HttpResponse {
    let mut res = HttpResponse::Found();
    res.insert_header((header::LOCATION, location));
    if let Some(notice) = notice {
        let mut cookie = Cookie::new(FLASH_COOKIE, notice.as_ref().to_string());
        cookie.set_path("/");
        cookie.set_http_only(true);
        res.cookie(cookie);
    }
    res.finish()
}

/// 200 with an HTML body; clears the incoming message cookie if one was sent.
pub fn page(html: String, incoming: &IncomingFlash) -> HttpResponse {
    let mut res = HttpResponse::Ok();
    res.content_type(ContentType::html());
    if incoming.has_cookie {
        let mut cookie = Cookie::new(FLASH_COOKIE, "");
        cookie.set_path("/");
        cookie.make_removal();
        res.cookie(cookie);
    }
    res.body(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    #[test]
    fn notice_round_trips_through_cookie_value() {
        assert_eq!(Notice::BadDateRange.as_ref(), "bad-date-range");
        assert_eq!("not-found".parse::<Notice>().unwrap(), Notice::NotFound);
        assert!("<script>".parse::<Notice>().is_err());
    }

    #[test]
    fn levels_follow_outcome() {
        assert_eq!(Flash::from(Notice::Submitted).level, FlashLevel::Success);
        assert_eq!(Flash::from(Notice::Deleted).level, FlashLevel::Info);
        assert_eq!(Flash::from(Notice::NotFound).level, FlashLevel::Error);
        assert_eq!(FlashLevel::Error.to_string(), "error");
    }

    #[actix_web::test]
    async fn extractor_reads_known_notice() {
        let req = TestRequest::default()
            .cookie(Cookie::new(FLASH_COOKIE, "deleted"))
            .to_http_request();
        let incoming = IncomingFlash::extract(&req).await.unwrap();
        assert_eq!(incoming.notice(), Some(Notice::Deleted));
    }

    #[actix_web::test]
    async fn extractor_ignores_unknown_or_missing_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(FLASH_COOKIE, "bogus"))
            .to_http_request();
        let incoming = IncomingFlash::extract(&req).await.unwrap();
        assert_eq!(incoming.notice(), None);
        assert!(incoming.has_cookie);

        let req = TestRequest::default().to_http_request();
        let incoming = IncomingFlash::extract(&req).await.unwrap();
        assert_eq!(incoming.notice(), None);
        assert!(!incoming.has_cookie);
    }

    #[test]
    fn redirect_sets_location_and_cookie() {
        let res = redirect("/add", Some(Notice::MissingFields));
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/add");
        let cookie = res.cookies().find(|c| c.name() == FLASH_COOKIE).unwrap();
        assert_eq!(cookie.value(), "missing-fields");
    }

    #[test]
    fn page_clears_consumed_cookie() {
        let incoming = IncomingFlash {
            notice: Some(Notice::Updated),
            has_cookie: true,
        };
        let res = page("<p>hi</p>".to_string(), &incoming);
        assert_eq!(res.status(), StatusCode::OK);
        let cookie = res.cookies().find(|c| c.name() == FLASH_COOKIE).unwrap();
        assert_eq!(cookie.value(), "");

        let incoming = IncomingFlash {
            notice: None,
            has_cookie: false,
        };
        let res = page("<p>hi</p>".to_string(), &incoming);
        assert!(res.cookies().next().is_none());
    }

    #[test]
    fn page_clears_unreadable_cookie() {
        let incoming = IncomingFlash {
            notice: None,
            has_cookie: true,
        };
        let res = page("<p>hi</p>".to_string(), &incoming);
        let cookie = res.cookies().find(|c| c.name() == FLASH_COOKIE).unwrap();
        assert_eq!(cookie.value(), "");
    }
}
