use super::code_family;

code_family! {
    /// Token verification failures surfaced by the codec itself.
    pub enum TokenCode: prefix = 4000, style = Padded(2), info = "token认证错误" {
        InvalidToken = 1 => "令牌无效，请登录" {
            "en" => "Invalid token, please log in",
            "zh_hk" => "令牌無效，請登入",
        },
        ExpiredToken = 2 => "令牌已过期，请重新获取令牌" {
            "en" => "Token has expired, please log in",
            "zh_hk" => "令牌已過期，請重新获取令牌",
        },
    }
}
