//! Request classification from raw header values.

use lazy_static::lazy_static;
use regex::Regex;

const STATIC_EXTENSIONS: &[&str] = &[
    "axd", "ashx", "bmp", "css", "gif", "htm", "html", "ico", "jpeg", "jpg", "js", "png", "rar",
    "zip", "map", "json", "svg", "woff", "woff2", "ttf", "eot", "txt", "less", "sass",
];

const LOOPBACK_V4: &str = "127.0.0.1";

lazy_static! {
    static ref MOBILE_BROWSER: Regex = Regex::new(concat!(
        r"(?i)",
        r"(android|bb\d+|meego).+mobile|avantgo|bada/|blackberry|blazer|compal",
        r"|elaine|fennec|hiptop|iemobile|ip(hone|od)|iris|kindle|lge |maemo|midp",
        r"|mmp|mobile.+firefox|netfront|opera m(ob|in)i|palm( os)?|phone|p(ixi",
        r"|re)/|plucker|pocket|psp|series(4|6)0|symbian|treo|up\.(browser|link)",
        r"|vodafone|wap|windows ce|xda|xiino"
    ))
    .expect("Invalid regex pattern");
    static ref MOBILE_PREFIX: Regex = Regex::new(concat!(
        r"(?i)",
        r"1207|6310|6590|3gso|4thp|50[1-6]i|770s|802s|a wa|abac|ac(er|oo|s\-)",
        r"|ai(ko|rn)|al(av|ca|co)|amoi|an(ex|ny|yw)|aptu|ar(ch|go)|as(te|us)|attw",
        r"|au(di|\-m|r |s )|avan|be(ck|ll|nq)|bi(lb|rd)|bl(ac|az)|br(e|v)w|bumb",
        r"|bw\-(n|u)|c55/|capi|ccwa|cdm\-|cell|chtm|cldc|cmd\-|co(mp|nd)|craw",
        r"|da(it|ll|ng)|dbte|dc\-s|devi|dica|dmob|do(c|p)o|ds(12|\-d)|el(49|ai)",
        r"|em(l2|ul)|er(ic|k0)|esl8|ez([4-7]0|os|wa|ze)|fetc|fly(\-|_)|g1 u|g560",
        r"|gene|gf\-5|g\-mo|go(\.w|od)|gr(ad|un)|haie|hcit|hd\-(m|p|t)|hei\-|hi(pt",
        r"|ta)|hp( i|ip)|hs\-c|ht(c(\-| |_|a|g|p|s|t)|tp)|hu(aw|tc)|i\-(20|go|ma)",
        r"|i230|iac( |\-|/)|ibro|idea|ig01|ikom|im1k|inno|ipaq|iris|ja(t|v)a|jbro",
        r"|jemu|jigs|kddi|keji|kgt( |/)|klon|kpt |kwc\-|kyo(c|k)|le(no|xi)|lg( g",
        r"|/(k|l|u)|50|54|\-[a-w])|libw|lynx|m1\-w|m3ga|m50/|ma(te|ui|xo)|mc(01|21",
        r"|ca)|m\-cr|me(rc|ri)|mi(o8|oa|ts)|mmef|mo(01|02|bi|de|do|t(\-| |o|v)|zz)",
        r"|mt(50|p1|v )|mwbp|mywa|n10[0-2]|n20[2-3]|n30(0|2)|n50(0|2|5)|n7(0(0|1)",
        r"|10)|ne((c|m)\-|on|tf|wf|wg|wt)|nok(6|i)|nzph|o2im|op(ti|wv)|oran|owg1",
        r"|p800|pan(a|d|t)|pdxg|pg(13|\-([1-8]|c))|phil|pire|pl(ay|uc)|pn\-2|po(ck",
        r"|rt|se)|prox|psio|pt\-g|qa\-a|qc(07|12|21|32|60|\-[2-7]|i\-)|qtek|r380",
        r"|r600|raks|rim9|ro(ve|zo)|s55/|sa(ge|ma|mm|ms|ny|va)|sc(01|h\-|oo|p\-)",
        r"|sdk/|se(c(\-|0|1)|47|mc|nd|ri)|sgh\-|shar|sie(\-|m)|sk\-0|sl(45|id)",
        r"|sm(al|ar|b3|it|t5)|so(ft|ny)|sp(01|h\-|v\-|v )|sy(01|mb)|t2(18|50)",
        r"|t6(00|10|18)|ta(gt|lk)|tcl\-|tdg\-|tel(i|m)|tim\-|t\-mo|to(pl|sh)|ts(70",
        r"|m\-|m3|m5)|tx\-9|up(\.b|g1|si)|utst|v400|v750|veri|vi(rg|te)|vk(40",
        r"|5[0-3]|\-v)|vm40|voda|vulc|vx(52|53|60|61|70|80|81|83|85|98)|w3c(\-| )",
        r"|webc|whit|wi(g |nc|nw)|wmlb|wonu|x700|yas\-|your|zeto|zte\-"
    ))
    .expect("Invalid regex pattern");
}

/// Whether `path` names a static asset by its extension. A query string or
/// fragment after the path is ignored.
pub fn is_static_resource(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let file_name = path.rsplit('/').next().unwrap_or_default();

    match file_name.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => STATIC_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension)),
        _ => false,
    }
}

/// Whether a `User-Agent` header belongs to a phone or tablet browser.
///
/// The whole agent is checked against known device and browser names, and its
/// first four characters against known vendor prefixes.
pub fn is_mobile_browser(user_agent: &str) -> bool {
    if user_agent.is_empty() {
        return false;
    }
    let prefix: String = user_agent.chars().take(4).collect();
    MOBILE_BROWSER.is_match(user_agent) || MOBILE_PREFIX.is_match(&prefix)
}

/// The client address of a request.
///
/// The socket address wins. The first `X-Forwarded-For` entry is used only
/// when the socket address is unknown. IPv6 loopback is reported as
/// `127.0.0.1`. Empty when neither is known.
pub fn client_ip(remote_addr: Option<&str>, forwarded_for: Option<&str>) -> String {
    let non_blank = |value: &&str| !value.trim().is_empty();
    let source = remote_addr
        .filter(non_blank)
        .or_else(|| forwarded_for.filter(non_blank))
        .unwrap_or_default();

    let first = source.split(',').next().unwrap_or_default().trim();
    if first == "::1" || first == "[::1]" {
        log::debug!("Loopback client address {} reported as {}", first, LOOPBACK_V4);
        return LOOPBACK_V4.to_string();
    }
    first.to_string()
}
