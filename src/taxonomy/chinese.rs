use crate::models::ServiceType::{self, Complementing, Substituting};

use super::CategoryDef;

/// Built-in Chinese dictionary, same ids and types as the English one.
///
/// Phrases are matched as raw substrings, so short terms such as `维修` also
/// fire inside longer ones such as `维修服务`.
const CATEGORIES: &[(&str, ServiceType, &[&str])] = &[
    (
        "maintenance_and_repair",
        Complementing,
        &[
            "维修", "维护", "保养", "检修", "大修", "维修保养", "售后服务",
            "售后维修", "运维服务", "维保服务", "现场服务", "故障维修",
        ],
    ),
    (
        "spare_parts_support",
        Complementing,
        &[
            "备品备件", "备件", "零配件", "配件销售", "替换件", "备件供应",
            "原厂配件", "配件服务", "零部件供应",
        ],
    ),
    (
        "leasing_and_rental",
        Substituting,
        &[
            "租赁", "融资租赁", "经营租赁", "经营性租赁", "设备租赁", "出租",
            "租用", "按次收费", "按使用量收费", "订阅服务", "即服务",
        ],
    ),
    (
        "warranty_and_insurance",
        Complementing,
        &[
            "质保", "保修", "延保", "延长保修", "质量保证金", "产品质保",
            "保险服务", "产品保险",
        ],
    ),
    (
        "installation_and_commissioning",
        Complementing,
        &[
            "安装", "调试", "安装调试", "安装服务", "现场安装", "设备安装",
            "系统安装", "交付调试", "部署服务",
        ],
    ),
    (
        "technical_support",
        Complementing,
        &[
            "技术支持", "技术服务", "技术支撑", "客户支持", "远程支持",
            "故障排除", "服务热线", "客服中心", "技术咨询服务",
        ],
    ),
    (
        "customization_and_r&d_services",
        Complementing,
        &[
            "定制化", "定制开发", "个性化定制", "定制服务", "工程设计",
            "技术开发服务", "研发服务", "委托研发", "联合研发",
        ],
    ),
    (
        "distribution_and_procurement",
        Complementing,
        &[
            "分销", "经销", "代理销售", "采购服务", "集中采购", "供应链服务",
            "物流服务", "仓储服务", "代采",
        ],
    ),
    (
        "training_and_consulting",
        Complementing,
        &[
            "培训", "技术培训", "客户培训", "咨询", "咨询服务", "管理咨询",
            "技术咨询", "教育服务", "认证培训",
        ],
    ),
    (
        "solutions_system_integration",
        Complementing,
        &[
            "解决方案", "整体解决方案", "一站式解决方案", "系统集成", "集成服务",
            "交钥匙工程", "总包", "工程总承包", "平台集成",
        ],
    ),
    (
        "digital_and_streaming_services",
        Complementing,
        &[
            "软件即服务", "SaaS", "云服务", "云平台", "数字化服务", "数字平台",
            "在线服务", "远程监控", "物联网服务", "数据分析服务", "工业互联网平台",
        ],
    ),
    (
        "performance_based_contracts",
        Substituting,
        &[
            "合同能源管理", "绩效合同", "按效果付费", "效果付费", "按使用付费",
            "性能保证", "服务水平协议", "可用性保证", "节能效益分享",
        ],
    ),
    (
        "recycling_and_process_management",
        Substituting,
        &[
            "回收", "再生利用", "循环利用", "资源回收", "废弃物处理", "固废处置",
            "危废处置", "再制造", "报废处置", "逆向物流",
        ],
    ),
];

/// The built-in Chinese category definitions.
pub fn categories() -> Vec<CategoryDef> {
    CATEGORIES
        .iter()
        .map(|(id, service_type, phrases)| CategoryDef::new(id, *service_type, phrases))
        .collect()
}
