//! # discover 命令实现
//!
//! 查询数据库中所有含氧的二元过渡金属化合物，把匹配的材料 id
//! 逐行打印到标准输出。输出可直接通过管道喂给 `harvest`。
//!
//! ## 依赖关系
//! - 使用 `cli/discover.rs` 定义的参数
//! - 使用 `mp/client.rs` 的查询端点
//! - 使用 `utils/progress.rs`

use crate::cli::discover::DiscoverArgs;
use crate::error::Result;
use crate::mp::MpClient;
use crate::utils::progress;

/// 查询覆盖的过渡金属集合
const TRANSITION_METALS: [&str; 10] = [
    "Co", "Cr", "Cu", "Fe", "Mn", "Ni", "Sc", "Ti", "V", "Zn",
];

/// 执行 discover 命令
pub fn execute(args: DiscoverArgs) -> Result<()> {
    let client = MpClient::new(&args.api_key, args.timeout)?;

    let spinner = progress::create_spinner("Querying binary transition metal oxides");
    let ids = client.query_material_ids(&binary_oxide_criteria());
    spinner.finish_and_clear();

    for id in ids? {
        println!("{}", id);
    }

    Ok(())
}

/// 氧 + 任一过渡金属、恰好两种元素的查询条件
fn binary_oxide_criteria() -> serde_json::Value {
    serde_json::json!({
        "elements": {"$in": TRANSITION_METALS, "$all": ["O"]},
        "nelements": 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_oxide_criteria_shape() {
        let criteria = binary_oxide_criteria();

        assert_eq!(criteria["nelements"], 2);
        assert_eq!(criteria["elements"]["$all"][0], "O");

        let metals = criteria["elements"]["$in"].as_array().unwrap();
        assert_eq!(metals.len(), 10);
        assert!(metals.iter().any(|m| m == "Ti"));
        assert!(metals.iter().any(|m| m == "Zn"));
    }
}
