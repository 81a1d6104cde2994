use super::code_family;

code_family! {
    /// Authentication and tenant-state errors raised by the guard pipeline.
    pub enum AuthCode: prefix = 4000, style = Padded(2), info = "token认证错误" {
        NeedLogin = 1 => "请登录！" {
            "en" => "Please log in!",
            "zh_hk" => "請登入",
        },
        InvalidToken = 2 => "令牌无效，请登录" {
            "en" => "Invalid token, please log in",
            "zh_hk" => "令牌無效，請登入",
        },
        ExpiredToken = 3 => "令牌已过期，请重新获取令牌" {
            "en" => "Token has expired, please log in",
            "zh_hk" => "令牌已過期，請重新获取令牌",
        },
        EmptyTenantId = 4 => "参数错误，tenant_id不能为空" {
            "en" => "Parameter error: tenant_id cannot be empty",
            "zh_hk" => "參數錯誤，tenant_id不能為空",
        },
        ErrorTenantId = 5 => "tenant_id 错误，当前用户不属于当前租户" {
            "en" => "Invalid tenant_id: The current user does not belong to the current tenant",
            "zh_hk" => "tenant_id 錯誤，當前用戶不屬於當前租戶",
        },
        AuthError = 6 => "无权访问" {
            "en" => "No authority to access",
            "zh_hk" => "無權訪問",
        },
        AuthErrorAction = 7 => "无权访问（{action}）" {
            "en" => "No authority to access ({action})",
            "zh_hk" => "無權訪問（{action}）",
        },
        PermissionDenied = 8 => "权限不足，无法操作" {
            "en" => "Permission denied",
            "zh_hk" => "權限不足，無法操作",
        },
        NeedJoinTenant = 9 => "请先创建或加入租户" {
            "en" => "Please create or join a tenant first",
            "zh_hk" => "請先建立或加入租戶",
        },
        NeedSelectTenant = 10 => "请先选择租户" {
            "en" => "Please select a tenant first",
            "zh_hk" => "請先选择租戶",
        },
    }
}
