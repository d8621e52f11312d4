//! Turns documentation anchors such as `#POST_api_v1_me_friend` into
//! endpoint descriptors such as `POST /api/v1/me/friend`.
//!
//! The anchors use `_` both between path segments and inside some segment
//! names, so a plain rewrite splits names like `needs_captcha`. Those are
//! patched back from [`UNDERLINE_EXCEPTIONS`].

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A path token whose underscores belong to the token itself.
#[derive(Debug, Clone, Copy)]
pub struct UnderlineException {
    pub slashed: &'static str,
    pub underscored: &'static str,
}

const fn exception(slashed: &'static str, underscored: &'static str) -> UnderlineException {
    UnderlineException { slashed, underscored }
}

// Longer tokens come before any token they contain.
pub const UNDERLINE_EXCEPTIONS: &[UnderlineException] = &[
    exception("accept/contributor/invite", "accept_contributor_invite"),
    exception("accept/moderator/invite", "accept_moderator_invite"),
    exception("by/id", "by_id"),
    exception("bulk/read", "bulk_read"),
    exception("close/thread", "close_thread"),
    exception("conversation/id", "conversation_id"),
    exception("del/msg", "del_msg"),
    exception("delete/sr/banner", "delete_sr_banner"),
    exception("delete/sr/header", "delete_sr_header"),
    exception("delete/sr/icon", "delete_sr_icon"),
    exception("delete/sr/img", "delete_sr_img"),
    exception("delete/update", "delete_update"),
    exception("happening/now", "happening_now"),
    exception("unignore/reports", "unignore_reports"),
    exception("ignore/reports", "ignore_reports"),
    exception("invite/contributor", "invite_contributor"),
    exception("leave/contributor", "leave_contributor"),
    exception("link/flair", "link_flair"),
    exception("unmute/message/author", "unmute_message_author"),
    exception("mute/message/author", "mute_message_author"),
    exception("needs/captcha", "needs_captcha"),
    exception("new/captcha", "new_captcha"),
    exception("read/all/messages", "read_all_messages"),
    exception("unread/message", "unread_message"),
    exception("read/message", "read_message"),
    exception("report/user", "report_user"),
    exception("rm/contributor/invite", "rm_contributor_invite"),
    exception("rm/contributor", "rm_contributor"),
    exception("saved/categories", "saved_categories"),
    exception("search/reddit/names", "search_reddit_names"),
    exception("search/subreddits", "search_subreddits"),
    exception("set/contest/mode", "set_contest_mode"),
    exception("set/contributor/permissions", "set_contributor_permissions"),
    exception("set/subreddit/sticky", "set_subreddit_sticky"),
    exception("set/suggested/sort", "set_suggested_sort"),
    exception("site/admin", "site_admin"),
    exception("store/visits", "store_visits"),
    exception("strike/update", "strike_update"),
    exception("submit/text", "submit_text"),
    exception("subreddit/stylesheet", "subreddit_stylesheet"),
    exception("subreddits/by/topic", "subreddits_by_topic"),
    exception("unblock/subreddit", "unblock_subreddit"),
    exception("upload/sr/img", "upload_sr_img"),
    exception("username/available", "username_available"),
];

static PERCENT_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([0-9A-Fa-f]{2})").expect("escape pattern is valid"));

/// Normalizes a table-of-contents href into a descriptor.
///
/// The leading `#` is dropped, the first `_` becomes `" /"`, every other `_`
/// becomes `/`, then each underline exception found in slash form is put back
/// in underscore form. Single pass; running it on its own output is not
/// guaranteed to be stable.
pub fn normalize(href: &str) -> String {
    let anchor = href.get(1..).unwrap_or_else(|| {
        let mut chars = href.chars();
        chars.next();
        chars.as_str()
    });

    let mut descriptor = anchor.replacen('_', " /", 1).replace('_', "/");

    for exception in UNDERLINE_EXCEPTIONS {
        if descriptor.contains(exception.slashed) {
            descriptor = descriptor.replace(exception.slashed, exception.underscored);
        }
    }

    descriptor
}

/// Decodes ASCII `%XX` escapes, so `/captcha/%7Biden%7D` reads `/captcha/{iden}`.
/// Escapes outside the ASCII range are left as they are.
pub fn decode_path_params(descriptor: &str) -> String {
    PERCENT_ESCAPE
        .replace_all(descriptor, |caps: &Captures<'_>| {
            match u8::from_str_radix(&caps[1], 16) {
                Ok(byte) if byte.is_ascii() => char::from(byte).to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_without_underscores_only_loses_its_first_char() {
        assert_eq!(normalize("#GET"), "GET");
        assert_eq!(normalize("#about.json"), "about.json");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn first_underscore_separates_method_from_path() {
        assert_eq!(normalize("#GET_api_v1_me"), "GET /api/v1/me");
        assert_eq!(normalize("#POST_api_v1_me_friend"), "POST /api/v1/me/friend");
        assert_eq!(normalize("#GET_hot"), "GET /hot");
    }

    #[test]
    fn underline_exceptions_keep_their_underscores() {
        assert_eq!(normalize("#GET_api_needs_captcha.json"), "GET /api/needs_captcha.json");
        assert_eq!(normalize("#POST_api_read_all_messages"), "POST /api/read_all_messages");
        assert_eq!(normalize("#GET_by_id_%7Bnames%7D"), "GET /by_id/%7Bnames%7D");
        assert_eq!(
            normalize("#GET_api_subreddits_by_topic.json"),
            "GET /api/subreddits_by_topic.json"
        );
    }

    #[test]
    fn contained_exceptions_resolve_to_the_longer_token() {
        assert_eq!(
            normalize("#POST_api_live_%7Bthread%7D_rm_contributor_invite"),
            "POST /api/live/%7Bthread%7D/rm_contributor_invite"
        );
        assert_eq!(
            normalize("#POST_api_live_%7Bthread%7D_rm_contributor"),
            "POST /api/live/%7Bthread%7D/rm_contributor"
        );
        assert_eq!(normalize("#POST_api_unread_message"), "POST /api/unread_message");
        assert_eq!(normalize("#POST_api_unignore_reports"), "POST /api/unignore_reports");
    }

    #[test]
    fn exception_leaves_the_rest_of_the_path_split() {
        assert_eq!(
            normalize("#POST_api_live_%7Bthread%7D_close_thread"),
            "POST /api/live/%7Bthread%7D/close_thread"
        );
    }

    #[test]
    fn moderation_and_account_tokens_stay_whole() {
        let cases = [
            ("#POST_api_set_suggested_sort", "POST /api/set_suggested_sort"),
            ("#POST_api_del_msg", "POST /api/del_msg"),
            ("#GET_api_username_available", "GET /api/username_available"),
            ("#POST_api_mute_message_author", "POST /api/mute_message_author"),
            ("#POST_api_unmute_message_author", "POST /api/unmute_message_author"),
            ("#POST_api_delete_sr_banner", "POST /api/delete_sr_banner"),
            ("#POST_api_delete_sr_icon", "POST /api/delete_sr_icon"),
            ("#GET_api_link_flair", "GET /api/link_flair"),
            ("#POST_api_report_user", "POST /api/report_user"),
            ("#POST_api_search_subreddits", "POST /api/search_subreddits"),
            ("#POST_api_mod_bulk_read", "POST /api/mod/bulk_read"),
            ("#GET_api_live_happening_now", "GET /api/live/happening_now"),
            (
                "#POST_api_mod_conversations_%7Bconversation_id%7D_archive",
                "POST /api/mod/conversations/%7Bconversation_id%7D/archive",
            ),
        ];
        for (href, expected) in cases {
            assert_eq!(normalize(href), expected, "normalizing {href}");
        }
    }

    #[test]
    fn longer_tokens_precede_tokens_they_contain() {
        for (i, later) in UNDERLINE_EXCEPTIONS.iter().enumerate() {
            for earlier in &UNDERLINE_EXCEPTIONS[..i] {
                assert!(
                    !later.slashed.contains(earlier.slashed),
                    "`{}` is listed after `{}`",
                    later.slashed,
                    earlier.slashed
                );
            }
        }
    }

    #[test]
    fn every_exception_maps_slashes_to_underscores() {
        for exception in UNDERLINE_EXCEPTIONS {
            assert_eq!(exception.slashed.replace('/', "_"), exception.underscored);
        }
    }

    #[test]
    fn decodes_brace_escapes() {
        assert_eq!(decode_path_params("GET /captcha/%7Biden%7D"), "GET /captcha/{iden}");
        assert_eq!(
            decode_path_params("POST /api/live/%7bthread%7d/close_thread"),
            "POST /api/live/{thread}/close_thread"
        );
    }

    #[test]
    fn leaves_non_ascii_and_malformed_escapes_alone() {
        assert_eq!(decode_path_params("GET /a/%E2%9C%93"), "GET /a/%E2%9C%93");
        assert_eq!(decode_path_params("GET /a/%zz"), "GET /a/%zz");
    }
}
