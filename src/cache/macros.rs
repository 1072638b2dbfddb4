/// A macro to simplify caching logic around an upstream call.
///
/// This macro checks if a fresh value is present in the cache.
/// If found, it returns the cached value.
/// If not found, it executes the provided block to compute the value,
/// stores it in the cache, and then returns the computed value.
/// Errors from the block are returned as-is and never cached.
///
/// # Arguments
/// * `$cache`: The cache instance to use for retrieval and storage. The cache must have
///   async `get` and `insert` methods.
/// * `$key`: The key to use for caching the value.
/// * `$ttl`: The freshness window for the cached value, as a `chrono::Duration`.
/// * `$block`: The future to await if the value is not found in cache.
///
/// # Example
/// ```rust,ignore
/// let value = cached!(cache, cache_key, ttl, async move {
///     fetch_from_upstream().await
/// });
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        if let Some(cached) = $cache.get(&$key).await {
            Ok(cached)
        } else {
            let value = $block.await?;
            $cache.insert($key, value.clone(), $ttl).await;
            Ok(value)
        }
    }};
}
