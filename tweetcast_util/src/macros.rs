#[doc(hidden)]
#[macro_export]
macro_rules! param_value {
    (, $name:ident) => {
        $name
    };
    ($value:expr, $name:ident) => {
        $value
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! push_param {
    ($params:ident, required, $key:expr, $value:expr) => {
        $params.push(($key, $value.to_string()));
    };
    ($params:ident, optional, $key:expr, $value:expr) => {
        if let Some(ref v) = $value {
            $params.push(($key, v.to_string()));
        }
    };
}

/// Build the query pairs of a request. A key without `=> value` reads the
/// variable of the same name; `optional` values are left out when `None`.
/// ```
/// use tweetcast_util::build_params;
///
/// let user = "44196397";
/// let cursor: Option<&str> = None;
/// let params = build_params! {
///     required user,
///     required count => 5,
///     optional cursor,
/// };
/// assert_eq!(params, [("user".to_string(), "44196397".to_string()), ("count".to_string(), "5".to_string())]);
/// ```
#[macro_export]
macro_rules! build_params {
    (
        $(
            $kind:ident $name:ident $( => $value:expr )?
        ),+ $(,)?
    ) => {
        {
            let mut params: Vec<(String, String)> = Vec::new();
            $(
                $crate::push_param!(
                    params,
                    $kind,
                    stringify!($name).to_string(),
                    $crate::param_value!($( $value )?, $name)
                );
            )+
            params
        }
    };
}
