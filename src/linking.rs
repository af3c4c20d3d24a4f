/// Deep links into the web interface
use crate::config::ExtensionConfig;

/// Path segment used for a chain's native currency
pub const NATIVE_CURRENCY_SEGMENT: &str = "NATIVE";

const NATIVE_ADDRESSES: [&str; 2] = [
    "0x0000000000000000000000000000000000000000",
    "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
];

/// Web interface URL slug for a chain id
pub fn chain_url_param(chain_id: u64) -> Option<&'static str> {
    let slug = match chain_id {
        1 => "ethereum",
        10 => "optimism",
        56 => "bnb",
        130 => "unichain",
        137 => "polygon",
        324 => "zksync",
        480 => "worldchain",
        8453 => "base",
        42161 => "arbitrum",
        42220 => "celo",
        43114 => "avalanche",
        81457 => "blast",
        7777777 => "zora",
        11155111 => "ethereum_sepolia",
        _ => return None,
    };
    Some(slug)
}

pub fn is_native_currency_address(address: &str) -> bool {
    NATIVE_ADDRESSES
        .iter()
        .any(|native| native.eq_ignore_ascii_case(address))
}

/// Split a currency id of the form `{chainId}-{address}`
pub fn parse_currency_id(currency_id: &str) -> Option<(u64, &str)> {
    let (chain, address) = currency_id.split_once('-')?;
    let chain_id = chain.trim().parse::<u64>().ok()?;
    let address = address.trim();

    if address.is_empty() {
        None
    } else {
        Some((chain_id, address))
    }
}

/// Token details page for a currency id
///
/// Examples:
/// - `1-0x6B17...1d0F` → `{tokens}/ethereum/0x6B17...1d0F`
/// - `8453-0x0000...0000` → `{tokens}/base/NATIVE`
pub fn get_token_url(config: &ExtensionConfig, currency_id: &str) -> Option<String> {
    let (chain_id, address) = parse_currency_id(currency_id)?;
    let chain = chain_url_param(chain_id)?;

    let token = if is_native_currency_address(address) {
        NATIVE_CURRENCY_SEGMENT
    } else {
        address
    };

    Some(format!("{}/{}/{}", config.web_interface_tokens_url(), chain, token))
}

/// NFT item page for a contract address and token id
pub fn get_nft_item_url(config: &ExtensionConfig, address: &str, token_id: &str) -> String {
    format!("{}/{}/{}", config.web_interface_nft_item_url(), address, token_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_token_url() {
        let config = ExtensionConfig::default();

        assert_eq!(
            get_token_url(&config, "1-0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            Some("https://app.uniswap.org/explore/tokens/ethereum/0x6B175474E89094C44Da98b954EedeAC495271d0F".to_string())
        );
        assert_eq!(
            get_token_url(&config, "42161-0xaf88d065e77c8cC2239327C5EDb3A432268e5831"),
            Some("https://app.uniswap.org/explore/tokens/arbitrum/0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string())
        );
    }

    #[test]
    fn test_get_token_url_native() {
        let config = ExtensionConfig::default();

        assert_eq!(
            get_token_url(&config, "8453-0x0000000000000000000000000000000000000000"),
            Some("https://app.uniswap.org/explore/tokens/base/NATIVE".to_string())
        );
        assert_eq!(
            get_token_url(&config, "1-0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE"),
            Some("https://app.uniswap.org/explore/tokens/ethereum/NATIVE".to_string())
        );
    }

    #[test]
    fn test_get_token_url_invalid() {
        let config = ExtensionConfig::default();

        assert_eq!(get_token_url(&config, ""), None);
        assert_eq!(get_token_url(&config, "not-a-currency"), None);
        assert_eq!(get_token_url(&config, "1-"), None);
        assert_eq!(get_token_url(&config, "0x6B175474E89094C44Da98b954EedeAC495271d0F"), None);
        // Unsupported chain
        assert_eq!(get_token_url(&config, "999999-0x6B175474E89094C44Da98b954EedeAC495271d0F"), None);
    }

    #[test]
    fn test_get_nft_item_url() {
        let config = ExtensionConfig::default();

        assert_eq!(
            get_nft_item_url(&config, "0xbd3531da5cf5857e7cfaa92426877b022e612cf8", "1234"),
            "https://app.uniswap.org/nfts/asset/0xbd3531da5cf5857e7cfaa92426877b022e612cf8/1234"
        );
    }
}
