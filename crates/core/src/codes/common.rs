use super::code_family;

code_family! {
    /// Shared business errors used across services.
    pub enum CommonCode: prefix = 100, style = Padded(2), info = "公共错误" {
        ParamError = 1 => "参数错误" {
            "en" => "Parameter error",
            "zh_hk" => "參數錯誤",
        },
        UserNotExists = 2 => "用户信息不存在，请重新注册登录！" {
            "en" => "User information does not exist, please register and log in again!",
            "zh_hk" => "用戶信息不存在，請重新註冊登入！",
        },
        UserNotInOrg = 3 => "您已被移出该机构！" {
            "en" => "You have been removed from the organization!",
            "zh_hk" => "您已被移出該機構！",
        },
        VisitNeedIntranet = 4 => "需要内网才能访问该接口（当前IP：{ip}）" {
            "en" => "Need intranet to access this interface (current IP: {ip})",
            "zh_hk" => "需要內網才能訪問該接口（當前IP：{ip}）",
        },
        NotBindRole = 5 => "账号异常！未绑定角色身份" {
            "en" => "Account abnormal! Not bound to role identity",
            "zh_hk" => "帳號異常！未綁定角色身份",
        },
        SaveFailed = 6 => "保存失败，请重试" {
            "en" => "Failed to save, please try again",
            "zh_hk" => "儲存失敗，請重試",
        },
        SaveSuccess = 7 => "保存成功" {
            "en" => "Saved successfully",
            "zh_hk" => "儲存成功",
        },
        OperationSuccess = 8 => "操作成功" {
            "en" => "Operation successful",
            "zh_hk" => "操作成功",
        },
        OperationFailed = 9 => "操作失败，请重试" {
            "en" => "Operation failed, please try again",
            "zh_hk" => "操作失敗，請重試",
        },
        LogoutSuccess = 10 => "退出成功" {
            "en" => "Logout successful",
            "zh_hk" => "退出成功",
        },
        LogoutFailed = 11 => "退出失败，请重试" {
            "en" => "Logout failed, please try again",
            "zh_hk" => "退出失敗，請重試",
        },
        AccountAbnormal = 12 => "账号异常，请重新登录" {
            "en" => "Account abnormal, please log in again",
            "zh_hk" => "帳號異常，請重新登入",
        },
        ImportSuccess = 13 => "导入成功" {
            "en" => "Import successful",
            "zh_hk" => "導入成功",
        },
        ImportFailed = 14 => "导入失败，请重试" {
            "en" => "Import failed, please try again",
            "zh_hk" => "導入失敗，請重試",
        },
        ExportSuccess = 15 => "导出成功" {
            "en" => "Export successful",
            "zh_hk" => "導出成功",
        },
        ExportFailed = 16 => "导出失败，请重试" {
            "en" => "Export failed, please try again",
            "zh_hk" => "導出失敗，請重試",
        },
        DataNotFound = 17 => "未查询到该条数据，请检查该数据是否存在" {
            "en" => "The data was not found. Please check whether the data exists.",
            "zh_hk" => "未查詢到該條數據，請檢查該數據是否存在",
        },
        ApprovalSubmitSuccess = 18 => "提交审批成功" {
            "en" => "Submit approval successful",
            "zh_hk" => "提交審批成功",
        },
        ApprovalSubmitFailed = 19 => "提交审批失败，请重试" {
            "en" => "Submit approval failed, please try again",
            "zh_hk" => "提交審批失敗，請重試",
        },
        SubmitSuccess = 20 => "提交成功" {
            "en" => "Submit successful",
            "zh_hk" => "提交成功",
        },
        SubmitFailed = 21 => "提交失败，请重试" {
            "en" => "Submit failed, please try again",
            "zh_hk" => "提交失敗，請重試",
        },
        ServiceException = 22 => "服务异常（{service_name}）[{error_msg}]" {
            "en" => "Service exception ({service_name}) [{error_msg}]",
            "zh_hk" => "服務異常（{service_name}）[{error_msg}]",
        },
        UploadFileEmpty = 23 => "请上传文件" {
            "en" => "Please upload a file",
            "zh_hk" => "請上傳文件",
        },
        FileFormatNotAllow = 24 => "文件格式（{file_ext}）不允许，只允许（{allow_ext}）" {
            "en" => "File format ({file_ext}) is not allowed, only allow ({allow_ext})",
            "zh_hk" => "文件格式（{file_ext}）不允許，只允許（{allow_ext}）",
        },
        BindSuccess = 25 => "绑定成功" {
            "en" => "Bind successful",
            "zh_hk" => "綁定成功",
        },
        BindFailed = 26 => "绑定失败，请重试" {
            "en" => "Binding failed, please try again",
            "zh_hk" => "綁定失敗，請重試",
        },
        PhoneFormatError = 27 => "手机号格式不正确" {
            "en" => "Phone number format is incorrect",
            "zh_hk" => "手機號格式不正確",
        },
        HasSubData = 28 => "请先删除子数据后，再删除此数据" {
            "en" => "Please delete the sub-data first, then delete this data",
            "zh_hk" => "請先刪除子數據後，再刪除此數據",
        },
        ImportFileIdEmpty = 29 => "文件标识未传递，请重试" {
            "en" => "File identifier not passed, please try again",
            "zh_hk" => "文件標識未傳遞，請重試",
        },
        ImportFileExpired = 30 => "文件已失效，请重新导入后下载" {
            "en" => "File has expired, please re-import and download",
            "zh_hk" => "文件已失效，請重新導入後下載",
        },
        ParamsEmptyWithField = 31 => "字段（{field}）不能为空" {
            "en" => "Field ({field}) cannot be empty",
            "zh_hk" => "欄位（{field}）不能為空",
        },
        ParamsWrongWithField = 32 => "字段（{field}）错误" {
            "en" => "Field ({field}) error",
            "zh_hk" => "欄位（{field}）錯誤",
        },
        EmailRuleError = 33 => "邮箱格式错误" {
            "en" => "Email format error",
            "zh_hk" => "郵箱格式錯誤",
        },
        FileMimeNotAllow = 34 => "图片mime类型（{file_mime}）不允许，只允许（{allow_mime}）" {
            "en" => "Image mime type ({file_mime}) is not allowed, only allow ({allow_mime})",
            "zh_hk" => "圖片mime類型（{file_mime}）不允許，只允許（{allow_mime}）",
        },
        ImportPartFailed = 35 => "导入部分出错" {
            "en" => "Import part failed",
            "zh_hk" => "導入部分出錯",
        },
        FileExtensionNotAllowed = 36 => "文件格式不允许" {
            "en" => "File format not allowed",
            "zh_hk" => "文件格式不允許",
        },
        ServerError = 37 => "服务器内部错误，请稍后再试" {
            "en" => "Server internal error, please try again later",
            "zh_hk" => "服務器內部錯誤，請稍後再試",
        },
    }
}
