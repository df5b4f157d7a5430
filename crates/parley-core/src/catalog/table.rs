use super::{PermissionGroup, PermissionKind, RawEntry};

permission_table! {
    1 => B_SERVERINSTANCE_HELP_VIEW, "b_serverinstance_help_view", GlobalInfo, "Retrieve information about ServerQuery commands";
    2 => B_SERVERINSTANCE_VERSION_VIEW, "b_serverinstance_version_view", GlobalInfo, "Retrieve global server version (including platform and build number)";
    3 => B_SERVERINSTANCE_INFO_VIEW, "b_serverinstance_info_view", GlobalInfo, "Retrieve global server information";
    4 => B_SERVERINSTANCE_VIRTUALSERVER_LIST, "b_serverinstance_virtualserver_list", GlobalInfo, "List virtual servers stored in the sql";
    5 => B_SERVERINSTANCE_BINDING_LIST, "b_serverinstance_binding_list", GlobalInfo, "List active IP bindings on multi-homed machines";
    6 => B_SERVERINSTANCE_PERMISSION_LIST, "b_serverinstance_permission_list", GlobalInfo, "List permissions available available on the server instance";
    7 => B_SERVERINSTANCE_PERMISSION_FIND, "b_serverinstance_permission_find", GlobalInfo, "Search permission assignments by name or ID";
    8 => B_VIRTUALSERVER_CREATE, "b_virtualserver_create", GlobalVsManage, "Create virtual servers";
    9 => B_VIRTUALSERVER_DELETE, "b_virtualserver_delete", GlobalVsManage, "Delete virtual servers";
    10 => B_VIRTUALSERVER_START_ANY, "b_virtualserver_start_any", GlobalVsManage, "Start any virtual server in the server instance";
    11 => B_VIRTUALSERVER_STOP_ANY, "b_virtualserver_stop_any", GlobalVsManage, "Stop any virtual server in the server instance";
    12 => B_VIRTUALSERVER_CHANGE_MACHINE_ID, "b_virtualserver_change_machine_id", GlobalVsManage, "Change a virtual servers machine ID";
    13 => B_VIRTUALSERVER_CHANGE_TEMPLATE, "b_virtualserver_change_template", GlobalVsManage, "Edit virtual server default template values";
    14 => B_SERVERQUERY_LOGIN, "b_serverquery_login", GlobalAdmin, "Login to ServerQuery";
    15 => B_SERVERINSTANCE_TEXTMESSAGE_SEND, "b_serverinstance_textmessage_send", GlobalAdmin, "Send text messages to all virtual servers at once";
    16 => B_SERVERINSTANCE_LOG_VIEW, "b_serverinstance_log_view", GlobalAdmin, "Retrieve global server log";
    17 => B_SERVERINSTANCE_LOG_ADD, "b_serverinstance_log_add", GlobalAdmin, "Write to global server log";
    18 => B_SERVERINSTANCE_STOP, "b_serverinstance_stop", GlobalAdmin, "Shutdown the server process";
    19 => B_SERVERINSTANCE_MODIFY_SETTINGS, "b_serverinstance_modify_settings", GlobalSettings, "Edit global settings";
    20 => B_SERVERINSTANCE_MODIFY_QUERYGROUP, "b_serverinstance_modify_querygroup", GlobalSettings, "Edit global ServerQuery groups";
    21 => B_SERVERINSTANCE_MODIFY_TEMPLATES, "b_serverinstance_modify_templates", GlobalSettings, "Edit global template groups";
    22 => B_VIRTUALSERVER_SELECT, "b_virtualserver_select", VsInfo, "Select a virtual server";
    23 => B_VIRTUALSERVER_INFO_VIEW, "b_virtualserver_info_view", VsInfo, "Retrieve virtual server information";
    24 => B_VIRTUALSERVER_CONNECTIONINFO_VIEW, "b_virtualserver_connectioninfo_view", VsInfo, "Retrieve virtual server connection information";
    25 => B_VIRTUALSERVER_CHANNEL_LIST, "b_virtualserver_channel_list", VsInfo, "List channels on a virtual server";
    26 => B_VIRTUALSERVER_CHANNEL_SEARCH, "b_virtualserver_channel_search", VsInfo, "Search for channels on a virtual server";
    27 => B_VIRTUALSERVER_CLIENT_LIST, "b_virtualserver_client_list", VsInfo, "List clients online on a virtual server";
    28 => B_VIRTUALSERVER_CLIENT_SEARCH, "b_virtualserver_client_search", VsInfo, "Search for clients online on a virtual server";
    29 => B_VIRTUALSERVER_CLIENT_DBLIST, "b_virtualserver_client_dblist", VsInfo, "List client identities known by the virtual server";
    30 => B_VIRTUALSERVER_CLIENT_DBSEARCH, "b_virtualserver_client_dbsearch", VsInfo, "Search for client identities known by the virtual server";
    31 => B_VIRTUALSERVER_CLIENT_DBINFO, "b_virtualserver_client_dbinfo", VsInfo, "Retrieve client information";
    32 => B_VIRTUALSERVER_PERMISSION_FIND, "b_virtualserver_permission_find", VsInfo, "Find permissions";
    33 => B_VIRTUALSERVER_CUSTOM_SEARCH, "b_virtualserver_custom_search", VsInfo, "Find custom fields";
    34 => B_VIRTUALSERVER_START, "b_virtualserver_start", VsAdmin, "Start own virtual server";
    35 => B_VIRTUALSERVER_STOP, "b_virtualserver_stop", VsAdmin, "Stop own virtual server";
    36 => B_VIRTUALSERVER_TOKEN_LIST_ALL, "b_virtualserver_token_list_all", VsAdmin, "Allows the client to list all tokens and not only his own";
    37 => I_VIRTUALSERVER_TOKEN_LIMIT, "i_virtualserver_token_limit", VsAdmin, "Max number of pending tokens a client could have";
    38 => B_VIRTUALSERVER_TOKEN_EDIT_ALL, "b_virtualserver_token_edit_all", VsAdmin, "Edit all generated tokens";
    39 => B_VIRTUALSERVER_TOKEN_USE, "b_virtualserver_token_use", VsAdmin, "Use a privilege keys to gain access to groups";
    40 => B_VIRTUALSERVER_TOKEN_DELETE_ALL, "b_virtualserver_token_delete_all", VsAdmin, "Allows the client to delete all tokens and not only the owned ones";
    41 => B_VIRTUALSERVER_LOG_VIEW, "b_virtualserver_log_view", VsAdmin, "Retrieve virtual server log";
    42 => B_VIRTUALSERVER_LOG_ADD, "b_virtualserver_log_add", VsAdmin, "Write to virtual server log";
    43 => B_VIRTUALSERVER_JOIN_IGNORE_PASSWORD, "b_virtualserver_join_ignore_password", VsAdmin, "Join virtual server ignoring its password";
    44 => B_VIRTUALSERVER_NOTIFY_REGISTER, "b_virtualserver_notify_register", VsAdmin, "Register for server notifications";
    45 => B_VIRTUALSERVER_NOTIFY_UNREGISTER, "b_virtualserver_notify_unregister", VsAdmin, "Unregister from server notifications";
    46 => B_VIRTUALSERVER_SNAPSHOT_CREATE, "b_virtualserver_snapshot_create", VsAdmin, "Create server snapshots";
    47 => B_VIRTUALSERVER_SNAPSHOT_DEPLOY, "b_virtualserver_snapshot_deploy", VsAdmin, "Deploy server snapshots";
    48 => B_VIRTUALSERVER_PERMISSION_RESET, "b_virtualserver_permission_reset", VsAdmin, "Reset the server permission settings to default values";
    49 => B_VIRTUALSERVER_MODIFY_NAME, "b_virtualserver_modify_name", VsSettings, "Modify server name";
    50 => B_VIRTUALSERVER_MODIFY_WELCOMEMESSAGE, "b_virtualserver_modify_welcomemessage", VsSettings, "Modify welcome message";
    51 => B_VIRTUALSERVER_MODIFY_MAXCHANNELS, "b_virtualserver_modify_maxchannels", VsSettings, "Modify servers max channels";
    52 => B_VIRTUALSERVER_MODIFY_MAXCLIENTS, "b_virtualserver_modify_maxclients", VsSettings, "Modify servers max clients";
    53 => B_VIRTUALSERVER_MODIFY_RESERVED_SLOTS, "b_virtualserver_modify_reserved_slots", VsSettings, "Modify reserved slots";
    54 => B_VIRTUALSERVER_MODIFY_PASSWORD, "b_virtualserver_modify_password", VsSettings, "Modify server password";
    55 => B_VIRTUALSERVER_MODIFY_DEFAULT_SERVERGROUP, "b_virtualserver_modify_default_servergroup", VsSettings, "Modify default Server Group";
    56 => B_VIRTUALSERVER_MODIFY_DEFAULT_MUSICGROUP, "b_virtualserver_modify_default_musicgroup", VsSettings, "Modify default music Group";
    57 => B_VIRTUALSERVER_MODIFY_DEFAULT_CHANNELGROUP, "b_virtualserver_modify_default_channelgroup", VsSettings, "Modify default Channel Group";
    58 => B_VIRTUALSERVER_MODIFY_DEFAULT_CHANNELADMINGROUP, "b_virtualserver_modify_default_channeladmingroup", VsSettings, "Modify default Channel Admin Group";
    59 => B_VIRTUALSERVER_MODIFY_CHANNEL_FORCED_SILENCE, "b_virtualserver_modify_channel_forced_silence", VsSettings, "Modify channel force silence value";
    60 => B_VIRTUALSERVER_MODIFY_COMPLAIN, "b_virtualserver_modify_complain", VsSettings, "Modify individual complain settings";
    61 => B_VIRTUALSERVER_MODIFY_ANTIFLOOD, "b_virtualserver_modify_antiflood", VsSettings, "Modify individual antiflood settings";
    62 => B_VIRTUALSERVER_MODIFY_FT_SETTINGS, "b_virtualserver_modify_ft_settings", VsSettings, "Modify file transfer settings";
    63 => B_VIRTUALSERVER_MODIFY_FT_QUOTAS, "b_virtualserver_modify_ft_quotas", VsSettings, "Modify file transfer quotas";
    64 => B_VIRTUALSERVER_MODIFY_HOSTMESSAGE, "b_virtualserver_modify_hostmessage", VsSettings, "Modify individual hostmessage settings";
    65 => B_VIRTUALSERVER_MODIFY_HOSTBANNER, "b_virtualserver_modify_hostbanner", VsSettings, "Modify individual hostbanner settings";
    66 => B_VIRTUALSERVER_MODIFY_HOSTBUTTON, "b_virtualserver_modify_hostbutton", VsSettings, "Modify individual hostbutton settings";
    67 => B_VIRTUALSERVER_MODIFY_PORT, "b_virtualserver_modify_port", VsSettings, "Modify server port";
    68 => B_VIRTUALSERVER_MODIFY_HOST, "b_virtualserver_modify_host", VsSettings, "Modify server host";
    69 => B_VIRTUALSERVER_MODIFY_DEFAULT_MESSAGES, "b_virtualserver_modify_default_messages", VsSettings, "Allows the client to edit the default messages";
    70 => B_VIRTUALSERVER_MODIFY_AUTOSTART, "b_virtualserver_modify_autostart", VsSettings, "Modify server autostart";
    71 => B_VIRTUALSERVER_MODIFY_NEEDED_IDENTITY_SECURITY_LEVEL, "b_virtualserver_modify_needed_identity_security_level", VsSettings, "Modify required identity security level";
    72 => B_VIRTUALSERVER_MODIFY_PRIORITY_SPEAKER_DIMM_MODIFICATOR, "b_virtualserver_modify_priority_speaker_dimm_modificator", VsSettings, "Modify priority speaker dimm modificator";
    73 => B_VIRTUALSERVER_MODIFY_LOG_SETTINGS, "b_virtualserver_modify_log_settings", VsSettings, "Modify log settings";
    74 => B_VIRTUALSERVER_MODIFY_MIN_CLIENT_VERSION, "b_virtualserver_modify_min_client_version", VsSettings, "Modify min client version";
    75 => B_VIRTUALSERVER_MODIFY_ICON_ID, "b_virtualserver_modify_icon_id", VsSettings, "Modify server icon";
    76 => B_VIRTUALSERVER_MODIFY_COUNTRY_CODE, "b_virtualserver_modify_country_code", VsSettings, "Modify servers country code property";
    77 => B_VIRTUALSERVER_MODIFY_CODEC_ENCRYPTION_MODE, "b_virtualserver_modify_codec_encryption_mode", VsSettings, "Modify codec encryption mode";
    78 => B_VIRTUALSERVER_MODIFY_TEMPORARY_PASSWORDS, "b_virtualserver_modify_temporary_passwords", VsSettings, "Modify temporary serverpasswords";
    79 => B_VIRTUALSERVER_MODIFY_TEMPORARY_PASSWORDS_OWN, "b_virtualserver_modify_temporary_passwords_own", VsSettings, "Modify own temporary serverpasswords";
    80 => B_VIRTUALSERVER_MODIFY_CHANNEL_TEMP_DELETE_DELAY_DEFAULT, "b_virtualserver_modify_channel_temp_delete_delay_default", VsSettings, "Modify default temporary channel delete delay";
    81 => B_VIRTUALSERVER_MODIFY_MUSIC_BOT_LIMIT, "b_virtualserver_modify_music_bot_limit", VsSettings, "Allow client to edit the server music bot limit";
    82 => I_CHANNEL_MIN_DEPTH, "i_channel_min_depth", Channel, "Min channel creation depth in hierarchy";
    83 => I_CHANNEL_MAX_DEPTH, "i_channel_max_depth", Channel, "Max channel creation depth in hierarchy";
    84 => B_CHANNEL_GROUP_INHERITANCE_END, "b_channel_group_inheritance_end", Channel, "Stop inheritance of channel group permissions";
    85 => I_CHANNEL_PERMISSION_MODIFY_POWER, "i_channel_permission_modify_power", Channel, "Modify channel permission power";
    86 => I_CHANNEL_NEEDED_PERMISSION_MODIFY_POWER, "i_channel_needed_permission_modify_power", Channel, "Needed modify channel permission power";
    87 => B_CHANNEL_INFO_VIEW, "b_channel_info_view", ChannelInfo, "Retrieve channel information";
    88 => B_VIRTUALSERVER_CHANNEL_PERMISSION_LIST, "b_virtualserver_channel_permission_list", GroupInfo, "Allows the client to view all channel permissions";
    89 => B_CHANNEL_CREATE_CHILD, "b_channel_create_child", ChannelCreate, "Create sub-channels";
    90 => B_CHANNEL_CREATE_PERMANENT, "b_channel_create_permanent", ChannelCreate, "Create permanent channels";
    91 => B_CHANNEL_CREATE_SEMI_PERMANENT, "b_channel_create_semi_permanent", ChannelCreate, "Create semi-permanent channels";
    92 => B_CHANNEL_CREATE_TEMPORARY, "b_channel_create_temporary", ChannelCreate, "Create temporary channels";
    93 => B_CHANNEL_CREATE_WITH_TOPIC, "b_channel_create_with_topic", ChannelCreate, "Create channels with a topic";
    94 => B_CHANNEL_CREATE_WITH_DESCRIPTION, "b_channel_create_with_description", ChannelCreate, "Create channels with a description";
    95 => B_CHANNEL_CREATE_WITH_PASSWORD, "b_channel_create_with_password", ChannelCreate, "Create password protected channels";
    96 => B_CHANNEL_CREATE_MODIFY_WITH_CODEC_OPUSVOICE, "b_channel_create_modify_with_codec_opusvoice", ChannelCreate, "Create channels using OPUS (voice) codec";
    97 => B_CHANNEL_CREATE_MODIFY_WITH_CODEC_OPUSMUSIC, "b_channel_create_modify_with_codec_opusmusic", ChannelCreate, "Create channels using OPUS (music) codec";
    98 => I_CHANNEL_CREATE_MODIFY_WITH_CODEC_MAXQUALITY, "i_channel_create_modify_with_codec_maxquality", ChannelCreate, "Create channels with custom codec quality";
    99 => I_CHANNEL_CREATE_MODIFY_WITH_CODEC_LATENCY_FACTOR_MIN, "i_channel_create_modify_with_codec_latency_factor_min", ChannelCreate, "Create channels with minimal custom codec latency factor";
    100 => B_CHANNEL_CREATE_WITH_MAXCLIENTS, "b_channel_create_with_maxclients", ChannelCreate, "Create channels with custom max clients";
    101 => B_CHANNEL_CREATE_WITH_MAXFAMILYCLIENTS, "b_channel_create_with_maxfamilyclients", ChannelCreate, "Create channels with custom max family clients";
    102 => B_CHANNEL_CREATE_WITH_SORTORDER, "b_channel_create_with_sortorder", ChannelCreate, "Create channels with custom sort order";
    103 => B_CHANNEL_CREATE_WITH_DEFAULT, "b_channel_create_with_default", ChannelCreate, "Create default channels";
    104 => B_CHANNEL_CREATE_WITH_NEEDED_TALK_POWER, "b_channel_create_with_needed_talk_power", ChannelCreate, "Create channels with needed talk power";
    105 => B_CHANNEL_CREATE_MODIFY_WITH_FORCE_PASSWORD, "b_channel_create_modify_with_force_password", ChannelCreate, "Create new channels only with password";
    106 => I_CHANNEL_CREATE_MODIFY_WITH_TEMP_DELETE_DELAY, "i_channel_create_modify_with_temp_delete_delay", ChannelCreate, "Max delete delay for temporary channels";
    107 => I_CHANNEL_CREATE_MODIFY_CONVERSATION_HISTORY_LENGTH, "i_channel_create_modify_conversation_history_length", ChannelCreate, "Upper limmit for the setting of the max conversation history limit";
    108 => B_CHANNEL_CREATE_MODIFY_CONVERSATION_HISTORY_UNLIMITED, "b_channel_create_modify_conversation_history_unlimited", ChannelCreate, "Allows the user to set the channel conversation history to unlimited";
    109 => B_CHANNEL_CREATE_MODIFY_CONVERSATION_MODE_PRIVATE, "b_channel_create_modify_conversation_mode_private", ChannelCreate, "Allows the user to set the channel conversation mode to private";
    110 => B_CHANNEL_CREATE_MODIFY_CONVERSATION_MODE_PUBLIC, "b_channel_create_modify_conversation_mode_public", ChannelCreate, "Allows the user to set the channel conversation mode to public";
    111 => B_CHANNEL_CREATE_MODIFY_CONVERSATION_MODE_NONE, "b_channel_create_modify_conversation_mode_none", ChannelCreate, "Allows the user to set the channel conversation mode to none";
    112 => B_CHANNEL_CREATE_MODIFY_SIDEBAR_MODE, "b_channel_create_modify_sidebar_mode", ChannelCreate, "Allows the user to change the channels sidebar apperiance";
    113 => B_CHANNEL_MODIFY_PARENT, "b_channel_modify_parent", ChannelModify, "Move channels";
    114 => B_CHANNEL_MODIFY_MAKE_DEFAULT, "b_channel_modify_make_default", ChannelModify, "Make channel default";
    115 => B_CHANNEL_MODIFY_MAKE_PERMANENT, "b_channel_modify_make_permanent", ChannelModify, "Make channel permanent";
    116 => B_CHANNEL_MODIFY_MAKE_SEMI_PERMANENT, "b_channel_modify_make_semi_permanent", ChannelModify, "Make channel semi-permanent";
    117 => B_CHANNEL_MODIFY_MAKE_TEMPORARY, "b_channel_modify_make_temporary", ChannelModify, "Make channel temporary";
    118 => B_CHANNEL_MODIFY_NAME, "b_channel_modify_name", ChannelModify, "Modify channel name";
    119 => B_CHANNEL_MODIFY_TOPIC, "b_channel_modify_topic", ChannelModify, "Modify channel topic";
    120 => B_CHANNEL_MODIFY_DESCRIPTION, "b_channel_modify_description", ChannelModify, "Modify channel description";
    121 => B_CHANNEL_MODIFY_PASSWORD, "b_channel_modify_password", ChannelModify, "Modify channel password";
    122 => B_CHANNEL_MODIFY_CODEC, "b_channel_modify_codec", ChannelModify, "Modify channel codec";
    123 => B_CHANNEL_MODIFY_CODEC_QUALITY, "b_channel_modify_codec_quality", ChannelModify, "Modify channel codec quality";
    124 => B_CHANNEL_MODIFY_CODEC_LATENCY_FACTOR, "b_channel_modify_codec_latency_factor", ChannelModify, "Modify channel codec latency factor";
    125 => B_CHANNEL_MODIFY_MAXCLIENTS, "b_channel_modify_maxclients", ChannelModify, "Modify channels max clients";
    126 => B_CHANNEL_MODIFY_MAXFAMILYCLIENTS, "b_channel_modify_maxfamilyclients", ChannelModify, "Modify channels max family clients";
    127 => B_CHANNEL_MODIFY_SORTORDER, "b_channel_modify_sortorder", ChannelModify, "Modify channel sort order";
    128 => B_CHANNEL_MODIFY_NEEDED_TALK_POWER, "b_channel_modify_needed_talk_power", ChannelModify, "Change needed channel talk power";
    129 => I_CHANNEL_MODIFY_POWER, "i_channel_modify_power", ChannelModify, "Channel modify power";
    130 => I_CHANNEL_NEEDED_MODIFY_POWER, "i_channel_needed_modify_power", ChannelModify, "Needed channel modify power";
    131 => B_CHANNEL_MODIFY_MAKE_CODEC_ENCRYPTED, "b_channel_modify_make_codec_encrypted", ChannelModify, "Make channel codec encrypted";
    132 => B_CHANNEL_MODIFY_TEMP_DELETE_DELAY, "b_channel_modify_temp_delete_delay", ChannelModify, "Modify temporary channel delete delay";
    133 => B_CHANNEL_CONVERSATION_MESSAGE_DELETE, "b_channel_conversation_message_delete", ChannelModify, "If set the user is able to delete conversation messages";
    134 => B_CHANNEL_DELETE_PERMANENT, "b_channel_delete_permanent", ChannelDelete, "Delete permanent channels";
    135 => B_CHANNEL_DELETE_SEMI_PERMANENT, "b_channel_delete_semi_permanent", ChannelDelete, "Delete semi-permanent channels";
    136 => B_CHANNEL_DELETE_TEMPORARY, "b_channel_delete_temporary", ChannelDelete, "Delete temporary channels";
    137 => B_CHANNEL_DELETE_FLAG_FORCE, "b_channel_delete_flag_force", ChannelDelete, "Force channel delete";
    138 => I_CHANNEL_DELETE_POWER, "i_channel_delete_power", ChannelDelete, "Delete channel power";
    139 => I_CHANNEL_NEEDED_DELETE_POWER, "i_channel_needed_delete_power", ChannelDelete, "Needed delete channel power";
    140 => B_CHANNEL_JOIN_PERMANENT, "b_channel_join_permanent", ChannelAccess, "Join permanent channels";
    141 => B_CHANNEL_JOIN_SEMI_PERMANENT, "b_channel_join_semi_permanent", ChannelAccess, "Join semi-permanent channels";
    142 => B_CHANNEL_JOIN_TEMPORARY, "b_channel_join_temporary", ChannelAccess, "Join temporary channels";
    143 => B_CHANNEL_JOIN_IGNORE_PASSWORD, "b_channel_join_ignore_password", ChannelAccess, "Join channel ignoring its password";
    144 => B_CHANNEL_JOIN_IGNORE_MAXCLIENTS, "b_channel_join_ignore_maxclients", ChannelAccess, "Ignore channels max clients limit";
    145 => I_CHANNEL_JOIN_POWER, "i_channel_join_power", ChannelAccess, "Channel join power";
    146 => I_CHANNEL_NEEDED_JOIN_POWER, "i_channel_needed_join_power", ChannelAccess, "Needed channel join power";
    147 => B_CHANNEL_IGNORE_JOIN_POWER, "b_channel_ignore_join_power", ChannelAccess, "Allows the client to bypass the channel join power";
    148 => I_CHANNEL_VIEW_POWER, "i_channel_view_power", ChannelAccess, "Channel view power";
    149 => I_CHANNEL_NEEDED_VIEW_POWER, "i_channel_needed_view_power", ChannelAccess, "Needed channel view power";
    150 => B_CHANNEL_IGNORE_VIEW_POWER, "b_channel_ignore_view_power", ChannelAccess, "If set the client see's every channel";
    151 => I_CHANNEL_SUBSCRIBE_POWER, "i_channel_subscribe_power", ChannelAccess, "Channel subscribe power";
    152 => I_CHANNEL_NEEDED_SUBSCRIBE_POWER, "i_channel_needed_subscribe_power", ChannelAccess, "Needed channel subscribe power";
    153 => B_CHANNEL_IGNORE_SUBSCRIBE_POWER, "b_channel_ignore_subscribe_power", ChannelAccess, "Allows the client to bypass the subscribe power";
    154 => I_CHANNEL_DESCRIPTION_VIEW_POWER, "i_channel_description_view_power", ChannelAccess, "Channel description view power";
    155 => I_CHANNEL_NEEDED_DESCRIPTION_VIEW_POWER, "i_channel_needed_description_view_power", ChannelAccess, "Needed channel needed description view power";
    156 => B_CHANNEL_IGNORE_DESCRIPTION_VIEW_POWER, "b_channel_ignore_description_view_power", ChannelAccess, "Allows the client to bypass the channel description view power";
    157 => I_ICON_ID, "i_icon_id", Group, "Group icon identifier";
    158 => I_MAX_ICON_FILESIZE, "i_max_icon_filesize", Group, "Max icon filesize in bytes";
    159 => I_MAX_PLAYLIST_SIZE, "i_max_playlist_size", Group, "Max songs within one playlist";
    160 => I_MAX_PLAYLISTS, "i_max_playlists", Group, "Max amount of playlists a client could own";
    161 => B_ICON_MANAGE, "b_icon_manage", Group, "Enables icon management";
    162 => B_GROUP_IS_PERMANENT, "b_group_is_permanent", Group, "Group is permanent";
    163 => I_GROUP_AUTO_UPDATE_TYPE, "i_group_auto_update_type", Group, "Group auto-update type";
    164 => I_GROUP_AUTO_UPDATE_MAX_VALUE, "i_group_auto_update_max_value", Group, "Group auto-update max value";
    165 => I_GROUP_SORT_ID, "i_group_sort_id", Group, "Group sort id";
    166 => I_GROUP_SHOW_NAME_IN_TREE, "i_group_show_name_in_tree", Group, "Show group name in tree depending on selected mode";
    167 => B_VIRTUALSERVER_SERVERGROUP_LIST, "b_virtualserver_servergroup_list", GroupInfo, "List server groups";
    168 => B_VIRTUALSERVER_SERVERGROUP_PERMISSION_LIST, "b_virtualserver_servergroup_permission_list", GroupInfo, "Allows the client to view all server group permissions";
    169 => B_VIRTUALSERVER_SERVERGROUP_CLIENT_LIST, "b_virtualserver_servergroup_client_list", GroupInfo, "List clients from a server group";
    170 => B_VIRTUALSERVER_CHANNELGROUP_LIST, "b_virtualserver_channelgroup_list", GroupInfo, "List channel groups";
    171 => B_VIRTUALSERVER_CHANNELGROUP_PERMISSION_LIST, "b_virtualserver_channelgroup_permission_list", GroupInfo, "Allows the client to view all channel group permissions";
    172 => B_VIRTUALSERVER_CHANNELGROUP_CLIENT_LIST, "b_virtualserver_channelgroup_client_list", GroupInfo, "List clients from a channel group";
    173 => B_VIRTUALSERVER_SERVERGROUP_CREATE, "b_virtualserver_servergroup_create", GroupCreate, "Create server groups";
    174 => B_VIRTUALSERVER_CHANNELGROUP_CREATE, "b_virtualserver_channelgroup_create", GroupCreate, "Create channel groups";
    175 => I_SERVER_GROUP_MODIFY_POWER, "i_server_group_modify_power", GroupModify, "Server group modify power";
    176 => I_SERVER_GROUP_NEEDED_MODIFY_POWER, "i_server_group_needed_modify_power", GroupModify, "Needed server group modify power";
    177 => I_SERVER_GROUP_MEMBER_ADD_POWER, "i_server_group_member_add_power", GroupModify, "Server group member add power";
    178 => I_SERVER_GROUP_SELF_ADD_POWER, "i_server_group_self_add_power", GroupModify, "Server group self add power";
    179 => I_SERVER_GROUP_NEEDED_MEMBER_ADD_POWER, "i_server_group_needed_member_add_power", GroupModify, "Needed server group member add power";
    180 => I_SERVER_GROUP_MEMBER_REMOVE_POWER, "i_server_group_member_remove_power", GroupModify, "Server group member delete power";
    181 => I_SERVER_GROUP_SELF_REMOVE_POWER, "i_server_group_self_remove_power", GroupModify, "Server group self delete power";
    182 => I_SERVER_GROUP_NEEDED_MEMBER_REMOVE_POWER, "i_server_group_needed_member_remove_power", GroupModify, "Needed server group member delete power";
    183 => I_CHANNEL_GROUP_MODIFY_POWER, "i_channel_group_modify_power", GroupModify, "Channel group modify power";
    184 => I_CHANNEL_GROUP_NEEDED_MODIFY_POWER, "i_channel_group_needed_modify_power", GroupModify, "Needed channel group modify power";
    185 => I_CHANNEL_GROUP_MEMBER_ADD_POWER, "i_channel_group_member_add_power", GroupModify, "Channel group member add power";
    186 => I_CHANNEL_GROUP_SELF_ADD_POWER, "i_channel_group_self_add_power", GroupModify, "Channel group self add power";
    187 => I_CHANNEL_GROUP_NEEDED_MEMBER_ADD_POWER, "i_channel_group_needed_member_add_power", GroupModify, "Needed channel group member add power";
    188 => I_CHANNEL_GROUP_MEMBER_REMOVE_POWER, "i_channel_group_member_remove_power", GroupModify, "Channel group member delete power";
    189 => I_CHANNEL_GROUP_SELF_REMOVE_POWER, "i_channel_group_self_remove_power", GroupModify, "Channel group self delete power";
    190 => I_CHANNEL_GROUP_NEEDED_MEMBER_REMOVE_POWER, "i_channel_group_needed_member_remove_power", GroupModify, "Needed channel group member delete power";
    191 => I_DISPLAYED_GROUP_MEMBER_ADD_POWER, "i_displayed_group_member_add_power", GroupModify, "The displayed member add power (Enables/Disabled the group in the select menu)";
    192 => I_DISPLAYED_GROUP_NEEDED_MEMBER_ADD_POWER, "i_displayed_group_needed_member_add_power", GroupModify, "The needed displayed member add power (Enables/Disabled the group in the select menu)";
    193 => I_DISPLAYED_GROUP_MEMBER_REMOVE_POWER, "i_displayed_group_member_remove_power", GroupModify, "The displayed member add power (Enables/Disabled the group in the select menu)";
    194 => I_DISPLAYED_GROUP_NEEDED_MEMBER_REMOVE_POWER, "i_displayed_group_needed_member_remove_power", GroupModify, "The needed displayed member add power (Enables/Disabled the group in the select menu)";
    195 => I_DISPLAYED_GROUP_MODIFY_POWER, "i_displayed_group_modify_power", GroupModify, "The displayed member add power (Enables/Disabled the group in the select menu)";
    196 => I_DISPLAYED_GROUP_NEEDED_MODIFY_POWER, "i_displayed_group_needed_modify_power", GroupModify, "The needed displayed member add power (Enables/Disabled the group in the select menu)";
    197 => I_PERMISSION_MODIFY_POWER, "i_permission_modify_power", GroupModify, "Permission modify power";
    198 => B_PERMISSION_MODIFY_POWER_IGNORE, "b_permission_modify_power_ignore", GroupModify, "Ignore needed permission modify power";
    199 => B_VIRTUALSERVER_SERVERGROUP_DELETE, "b_virtualserver_servergroup_delete", GroupDelete, "Delete server groups";
    200 => B_VIRTUALSERVER_CHANNELGROUP_DELETE, "b_virtualserver_channelgroup_delete", GroupDelete, "Delete channel groups";
    201 => I_CLIENT_PERMISSION_MODIFY_POWER, "i_client_permission_modify_power", Client, "Client permission modify power";
    202 => I_CLIENT_NEEDED_PERMISSION_MODIFY_POWER, "i_client_needed_permission_modify_power", Client, "Needed client permission modify power";
    203 => I_CLIENT_MAX_CLONES_UID, "i_client_max_clones_uid", Client, "Max additional connections per client identity";
    204 => I_CLIENT_MAX_CLONES_IP, "i_client_max_clones_ip", Client, "Max additional connections per client address";
    205 => I_CLIENT_MAX_CLONES_HWID, "i_client_max_clones_hwid", Client, "Max additional connections per client hardware id";
    206 => I_CLIENT_MAX_IDLETIME, "i_client_max_idletime", Client, "Max idle time in seconds";
    207 => I_CLIENT_MAX_AVATAR_FILESIZE, "i_client_max_avatar_filesize", Client, "Max avatar filesize in bytes";
    208 => I_CLIENT_MAX_CHANNEL_SUBSCRIPTIONS, "i_client_max_channel_subscriptions", Client, "Max channel subscriptions";
    209 => I_CLIENT_MAX_CHANNELS, "i_client_max_channels", Client, "Limit of created channels";
    210 => I_CLIENT_MAX_TEMPORARY_CHANNELS, "i_client_max_temporary_channels", Client, "Limit of created temporary channels";
    211 => I_CLIENT_MAX_SEMI_CHANNELS, "i_client_max_semi_channels", Client, "Limit of created semi-permanent channels";
    212 => I_CLIENT_MAX_PERMANENT_CHANNELS, "i_client_max_permanent_channels", Client, "Limit of created permanent channels";
    213 => B_CLIENT_USE_PRIORITY_SPEAKER, "b_client_use_priority_speaker", Client, "Allows the client to use priority speaker";
    214 => B_CLIENT_IS_PRIORITY_SPEAKER, "b_client_is_priority_speaker", Client, "Toogels the client priority speaker mode";
    215 => B_CLIENT_SKIP_CHANNELGROUP_PERMISSIONS, "b_client_skip_channelgroup_permissions", Client, "Ignore channel group permissions";
    216 => B_CLIENT_FORCE_PUSH_TO_TALK, "b_client_force_push_to_talk", Client, "Force Push-To-Talk capture mode";
    217 => B_CLIENT_IGNORE_BANS, "b_client_ignore_bans", Client, "Ignore bans";
    218 => B_CLIENT_IGNORE_VPN, "b_client_ignore_vpn", Client, "Ignore the vpn check";
    219 => B_CLIENT_IGNORE_ANTIFLOOD, "b_client_ignore_antiflood", Client, "Ignore antiflood measurements";
    220 => B_CLIENT_ENFORCE_VALID_HWID, "b_client_enforce_valid_hwid", Client, "Enforces the client to have a valid hardware id";
    221 => B_CLIENT_ALLOW_INVALID_PACKET, "b_client_allow_invalid_packet", Client, "Allow client to send invalid packets";
    222 => B_CLIENT_ALLOW_INVALID_BADGES, "b_client_allow_invalid_badges", Client, "Allow client to have invalid badges";
    223 => B_CLIENT_ISSUE_CLIENT_QUERY_COMMAND, "b_client_issue_client_query_command", Client, "Issue query commands from client";
    224 => B_CLIENT_USE_RESERVED_SLOT, "b_client_use_reserved_slot", Client, "Use an reserved slot";
    225 => B_CLIENT_USE_CHANNEL_COMMANDER, "b_client_use_channel_commander", Client, "Use channel commander";
    226 => B_CLIENT_REQUEST_TALKER, "b_client_request_talker", Client, "Allow to request talk power";
    227 => B_CLIENT_AVATAR_DELETE_OTHER, "b_client_avatar_delete_other", Client, "Allow deletion of avatars from other clients";
    228 => B_CLIENT_IS_STICKY, "b_client_is_sticky", Client, "Client will be sticked to current channel";
    229 => B_CLIENT_IGNORE_STICKY, "b_client_ignore_sticky", Client, "Client ignores sticky flag";
    230 => B_CLIENT_MUSIC_CREATE_PERMANENT, "b_client_music_create_permanent", Client, "Allows the client to create permanent music bots";
    231 => B_CLIENT_MUSIC_CREATE_SEMI_PERMANENT, "b_client_music_create_semi_permanent", Client, "Allows the client to create semi permanent music bots";
    232 => B_CLIENT_MUSIC_CREATE_TEMPORARY, "b_client_music_create_temporary", Client, "Permission to create a music bot";
    233 => B_CLIENT_MUSIC_MODIFY_PERMANENT, "b_client_music_modify_permanent", Client, "Allows the client to make a bot permanent";
    234 => B_CLIENT_MUSIC_MODIFY_SEMI_PERMANENT, "b_client_music_modify_semi_permanent", Client, "Allows the client to make a bot semi permanent";
    235 => B_CLIENT_MUSIC_MODIFY_TEMPORARY, "b_client_music_modify_temporary", Client, "Permission to make a music bot temporary";
    236 => I_CLIENT_MUSIC_CREATE_MODIFY_MAX_VOLUME, "i_client_music_create_modify_max_volume", Client, "Sets the max allowed music bot volume";
    237 => I_CLIENT_MUSIC_LIMIT, "i_client_music_limit", Client, "The limit of music bots bound to this client";
    238 => I_CLIENT_MUSIC_NEEDED_DELETE_POWER, "i_client_music_needed_delete_power", Client, "Required power to delete the music bot";
    239 => I_CLIENT_MUSIC_DELETE_POWER, "i_client_music_delete_power", Client, "Power to delete the music bot";
    240 => I_CLIENT_MUSIC_PLAY_POWER, "i_client_music_play_power", Client, "Power to play music";
    241 => I_CLIENT_MUSIC_NEEDED_PLAY_POWER, "i_client_music_needed_play_power", Client, "Required power to play music";
    242 => I_CLIENT_MUSIC_MODIFY_POWER, "i_client_music_modify_power", Client, "Power to modify the music bot settings";
    243 => I_CLIENT_MUSIC_NEEDED_MODIFY_POWER, "i_client_music_needed_modify_power", Client, "Required power to modify the bot settings";
    244 => I_CLIENT_MUSIC_RENAME_POWER, "i_client_music_rename_power", Client, "Power to rename the bot";
    245 => I_CLIENT_MUSIC_NEEDED_RENAME_POWER, "i_client_music_needed_rename_power", Client, "The required rename power for a music bot";
    246 => B_VIRTUALSERVER_PLAYLIST_PERMISSION_LIST, "b_virtualserver_playlist_permission_list", GroupInfo, "Allows the client to view all playlist permissions";
    247 => B_PLAYLIST_CREATE, "b_playlist_create", Client, "Allows the client to create playlists";
    248 => I_PLAYLIST_VIEW_POWER, "i_playlist_view_power", Client, "Power to see a playlist, and their songs";
    249 => I_PLAYLIST_NEEDED_VIEW_POWER, "i_playlist_needed_view_power", Client, "Needed power to see a playlist, and their songs";
    250 => I_PLAYLIST_MODIFY_POWER, "i_playlist_modify_power", Client, "Power to modify the playlist properties";
    251 => I_PLAYLIST_NEEDED_MODIFY_POWER, "i_playlist_needed_modify_power", Client, "Needed power to modify the playlist properties";
    252 => I_PLAYLIST_PERMISSION_MODIFY_POWER, "i_playlist_permission_modify_power", Client, "Power to modify the playlist permissions";
    253 => I_PLAYLIST_NEEDED_PERMISSION_MODIFY_POWER, "i_playlist_needed_permission_modify_power", Client, "Needed power to modify the playlist permissions";
    254 => I_PLAYLIST_DELETE_POWER, "i_playlist_delete_power", Client, "Power to delete the playlist";
    255 => I_PLAYLIST_NEEDED_DELETE_POWER, "i_playlist_needed_delete_power", Client, "Needed power to delete the playlist";
    256 => I_PLAYLIST_SONG_ADD_POWER, "i_playlist_song_add_power", Client, "Power to add songs to a playlist";
    257 => I_PLAYLIST_SONG_NEEDED_ADD_POWER, "i_playlist_song_needed_add_power", Client, "Needed power to add songs to a playlist";
    258 => I_PLAYLIST_SONG_REMOVE_POWER, "i_playlist_song_remove_power", Client, "Power to remove songs from a playlist";
    259 => I_PLAYLIST_SONG_NEEDED_REMOVE_POWER, "i_playlist_song_needed_remove_power", Client, "Needed power to remove songs from a playlist";
    260 => I_PLAYLIST_SONG_MOVE_POWER, "i_playlist_song_move_power", Client, "Power to move songs witin a playlist";
    261 => I_PLAYLIST_SONG_NEEDED_MOVE_POWER, "i_playlist_song_needed_move_power", Client, "Needed power to move songs within a playlist";
    262 => B_CLIENT_INFO_VIEW, "b_client_info_view", ClientInfo, "Retrieve client information";
    263 => B_CLIENT_PERMISSIONOVERVIEW_VIEW, "b_client_permissionoverview_view", ClientInfo, "Retrieve client permissions overview";
    264 => B_CLIENT_PERMISSIONOVERVIEW_OWN, "b_client_permissionoverview_own", ClientInfo, "Retrieve clients own permissions overview";
    265 => B_CLIENT_REMOTEADDRESS_VIEW, "b_client_remoteaddress_view", ClientInfo, "View client IP address and port";
    266 => I_CLIENT_SERVERQUERY_VIEW_POWER, "i_client_serverquery_view_power", ClientInfo, "ServerQuery view power";
    267 => I_CLIENT_NEEDED_SERVERQUERY_VIEW_POWER, "i_client_needed_serverquery_view_power", ClientInfo, "Needed ServerQuery view power";
    268 => B_CLIENT_CUSTOM_INFO_VIEW, "b_client_custom_info_view", ClientInfo, "View custom fields";
    269 => B_CLIENT_MUSIC_CHANNEL_LIST, "b_client_music_channel_list", ClientInfo, "List all music bots in the current channel";
    270 => B_CLIENT_MUSIC_SERVER_LIST, "b_client_music_server_list", ClientInfo, "List all music bots on the sderver";
    271 => I_CLIENT_MUSIC_INFO, "i_client_music_info", ClientInfo, "Permission to view music bot info";
    272 => I_CLIENT_MUSIC_NEEDED_INFO, "i_client_music_needed_info", ClientInfo, "Required permission to view music bot info";
    273 => B_VIRTUALSERVER_CHANNELCLIENT_PERMISSION_LIST, "b_virtualserver_channelclient_permission_list", GroupInfo, "Allows the client to view all client channel permissions";
    274 => B_VIRTUALSERVER_CLIENT_PERMISSION_LIST, "b_virtualserver_client_permission_list", GroupInfo, "Allows the client to view all client permissions";
    275 => I_CLIENT_KICK_FROM_SERVER_POWER, "i_client_kick_from_server_power", ClientAdmin, "Client kick power from server";
    276 => I_CLIENT_NEEDED_KICK_FROM_SERVER_POWER, "i_client_needed_kick_from_server_power", ClientAdmin, "Needed client kick power from server";
    277 => I_CLIENT_KICK_FROM_CHANNEL_POWER, "i_client_kick_from_channel_power", ClientAdmin, "Client kick power from channel";
    278 => I_CLIENT_NEEDED_KICK_FROM_CHANNEL_POWER, "i_client_needed_kick_from_channel_power", ClientAdmin, "Needed client kick power from channel";
    279 => I_CLIENT_BAN_POWER, "i_client_ban_power", ClientAdmin, "Client ban power";
    280 => I_CLIENT_NEEDED_BAN_POWER, "i_client_needed_ban_power", ClientAdmin, "Needed client ban power";
    281 => I_CLIENT_MOVE_POWER, "i_client_move_power", ClientAdmin, "Client move power";
    282 => I_CLIENT_NEEDED_MOVE_POWER, "i_client_needed_move_power", ClientAdmin, "Needed client move power";
    283 => I_CLIENT_COMPLAIN_POWER, "i_client_complain_power", ClientAdmin, "Complain power";
    284 => I_CLIENT_NEEDED_COMPLAIN_POWER, "i_client_needed_complain_power", ClientAdmin, "Needed complain power";
    285 => B_CLIENT_COMPLAIN_LIST, "b_client_complain_list", ClientAdmin, "Show complain list";
    286 => B_CLIENT_COMPLAIN_DELETE_OWN, "b_client_complain_delete_own", ClientAdmin, "Delete own complains";
    287 => B_CLIENT_COMPLAIN_DELETE, "b_client_complain_delete", ClientAdmin, "Delete complains";
    288 => B_CLIENT_BAN_LIST, "b_client_ban_list", ClientAdmin, "Show banlist";
    289 => B_CLIENT_BAN_LIST_GLOBAL, "b_client_ban_list_global", ClientAdmin, "Show banlist globaly";
    290 => B_CLIENT_BAN_TRIGGER_LIST, "b_client_ban_trigger_list", ClientAdmin, "Show trigger banlist";
    291 => B_CLIENT_BAN_CREATE, "b_client_ban_create", ClientAdmin, "Add a ban";
    292 => B_CLIENT_BAN_CREATE_GLOBAL, "b_client_ban_create_global", ClientAdmin, "Allow to create global bans";
    293 => B_CLIENT_BAN_NAME, "b_client_ban_name", ClientAdmin, "Allows the client to ban a client by name";
    294 => B_CLIENT_BAN_IP, "b_client_ban_ip", ClientAdmin, "Allows the client to ban a client by ip";
    295 => B_CLIENT_BAN_HWID, "b_client_ban_hwid", ClientAdmin, "Allows the client to ban a client hardware id";
    296 => B_CLIENT_BAN_EDIT, "b_client_ban_edit", ClientAdmin, "Allow to edit bans";
    297 => B_CLIENT_BAN_EDIT_GLOBAL, "b_client_ban_edit_global", ClientAdmin, "Allow to edit global bans";
    298 => B_CLIENT_BAN_DELETE_OWN, "b_client_ban_delete_own", ClientAdmin, "Delete own bans";
    299 => B_CLIENT_BAN_DELETE, "b_client_ban_delete", ClientAdmin, "Delete bans";
    300 => B_CLIENT_BAN_DELETE_OWN_GLOBAL, "b_client_ban_delete_own_global", ClientAdmin, "Delete own global bans";
    301 => B_CLIENT_BAN_DELETE_GLOBAL, "b_client_ban_delete_global", ClientAdmin, "Delete global bans";
    302 => I_CLIENT_BAN_MAX_BANTIME, "i_client_ban_max_bantime", ClientAdmin, "Max bantime";
    303 => I_CLIENT_PRIVATE_TEXTMESSAGE_POWER, "i_client_private_textmessage_power", ClientBasic, "Client private message power";
    304 => I_CLIENT_NEEDED_PRIVATE_TEXTMESSAGE_POWER, "i_client_needed_private_textmessage_power", ClientBasic, "Needed client private message power";
    305 => B_CLIENT_EVEN_TEXTMESSAGE_SEND, "b_client_even_textmessage_send", ClientBasic, "Allows the client to send text messages to himself";
    306 => B_CLIENT_SERVER_TEXTMESSAGE_SEND, "b_client_server_textmessage_send", ClientBasic, "Send text messages to virtual server";
    307 => B_CLIENT_CHANNEL_TEXTMESSAGE_SEND, "b_client_channel_textmessage_send", ClientBasic, "Send text messages to channel";
    308 => B_CLIENT_OFFLINE_TEXTMESSAGE_SEND, "b_client_offline_textmessage_send", ClientBasic, "Send offline messages to clients";
    309 => I_CLIENT_TALK_POWER, "i_client_talk_power", ClientBasic, "Client talk power";
    310 => I_CLIENT_NEEDED_TALK_POWER, "i_client_needed_talk_power", ClientBasic, "Needed client talk power";
    311 => I_CLIENT_POKE_POWER, "i_client_poke_power", ClientBasic, "Client poke power";
    312 => I_CLIENT_NEEDED_POKE_POWER, "i_client_needed_poke_power", ClientBasic, "Needed client poke power";
    313 => I_CLIENT_POKE_MAX_CLIENTS, "i_client_poke_max_clients", ClientBasic, "Max amount of clients which could be poked at once";
    314 => B_CLIENT_SET_FLAG_TALKER, "b_client_set_flag_talker", ClientBasic, "Set the talker flag for clients and allow them to speak";
    315 => I_CLIENT_WHISPER_POWER, "i_client_whisper_power", ClientBasic, "Client whisper power";
    316 => I_CLIENT_NEEDED_WHISPER_POWER, "i_client_needed_whisper_power", ClientBasic, "Client needed whisper power";
    317 => B_VIDEO_SCREEN, "b_video_screen", ClientBasic, "Client can show his screen";
    318 => B_VIDEO_CAMERA, "b_video_camera", ClientBasic, "Client can show his video camera";
    319 => I_VIDEO_MAX_KBPS, "i_video_max_kbps", ClientBasic, "The maximal bandwidth used by the client to transmit video";
    320 => I_VIDEO_MAX_STREAMS, "i_video_max_streams", ClientBasic, "The maximal number of streams a client can simultaneously receive";
    321 => I_VIDEO_MAX_SCREEN_STREAMS, "i_video_max_screen_streams", ClientBasic, "The maximal number of video streams a client can simultaneously receive";
    322 => I_VIDEO_MAX_CAMERA_STREAMS, "i_video_max_camera_streams", ClientBasic, "The maximal number of camera streams a client can simultaneously receive";
    323 => B_CLIENT_MODIFY_DESCRIPTION, "b_client_modify_description", ClientModify, "Edit a clients description";
    324 => B_CLIENT_MODIFY_OWN_DESCRIPTION, "b_client_modify_own_description", ClientModify, "Allow client to edit own description";
    325 => B_CLIENT_USE_BBCODE_ANY, "b_client_use_bbcode_any", Client, "Allows the client to use any bbcodes";
    326 => B_CLIENT_USE_BBCODE_URL, "b_client_use_bbcode_url", Client, "Allows the client to use url bbcode";
    327 => B_CLIENT_USE_BBCODE_IMAGE, "b_client_use_bbcode_image", Client, "Allows the client to use img bbcode";
    328 => B_CLIENT_MODIFY_DBPROPERTIES, "b_client_modify_dbproperties", ClientModify, "Edit a clients properties in the sql";
    329 => B_CLIENT_DELETE_DBPROPERTIES, "b_client_delete_dbproperties", ClientModify, "Delete a clients properties in the sql";
    330 => B_CLIENT_CREATE_MODIFY_SERVERQUERY_LOGIN, "b_client_create_modify_serverquery_login", ClientModify, "Create or modify own ServerQuery account";
    331 => B_CLIENT_QUERY_CREATE, "b_client_query_create", ClientModify, "Create a ServerQuery account for any user";
    332 => B_CLIENT_QUERY_CREATE_OWN, "b_client_query_create_own", ClientModify, "Create your own ServerQuery account";
    333 => B_CLIENT_QUERY_LIST, "b_client_query_list", ClientModify, "List all ServerQuery accounts";
    334 => B_CLIENT_QUERY_LIST_OWN, "b_client_query_list_own", ClientModify, "List all own ServerQuery accounts";
    335 => B_CLIENT_QUERY_RENAME, "b_client_query_rename", ClientModify, "Rename a ServerQuery account";
    336 => B_CLIENT_QUERY_RENAME_OWN, "b_client_query_rename_own", ClientModify, "Rename the own ServerQuery account";
    337 => B_CLIENT_QUERY_CHANGE_PASSWORD, "b_client_query_change_password", ClientModify, "Change a server query accounts password";
    338 => B_CLIENT_QUERY_CHANGE_OWN_PASSWORD, "b_client_query_change_own_password", ClientModify, "Change a query accounts own password";
    339 => B_CLIENT_QUERY_CHANGE_PASSWORD_GLOBAL, "b_client_query_change_password_global", ClientModify, "Change a global query accounts own password";
    340 => B_CLIENT_QUERY_DELETE, "b_client_query_delete", ClientModify, "Delete a query accounts password";
    341 => B_CLIENT_QUERY_DELETE_OWN, "b_client_query_delete_own", ClientModify, "Delete own query accounts password";
    342 => B_FT_IGNORE_PASSWORD, "b_ft_ignore_password", FileTransfer, "Browse files without channel password";
    343 => B_FT_TRANSFER_LIST, "b_ft_transfer_list", FileTransfer, "Retrieve list of running filetransfers";
    344 => I_FT_FILE_UPLOAD_POWER, "i_ft_file_upload_power", FileTransfer, "File upload power";
    345 => I_FT_NEEDED_FILE_UPLOAD_POWER, "i_ft_needed_file_upload_power", FileTransfer, "Needed file upload power";
    346 => I_FT_FILE_DOWNLOAD_POWER, "i_ft_file_download_power", FileTransfer, "File download power";
    347 => I_FT_NEEDED_FILE_DOWNLOAD_POWER, "i_ft_needed_file_download_power", FileTransfer, "Needed file download power";
    348 => I_FT_FILE_DELETE_POWER, "i_ft_file_delete_power", FileTransfer, "File delete power";
    349 => I_FT_NEEDED_FILE_DELETE_POWER, "i_ft_needed_file_delete_power", FileTransfer, "Needed file delete power";
    350 => I_FT_FILE_RENAME_POWER, "i_ft_file_rename_power", FileTransfer, "File rename power";
    351 => I_FT_NEEDED_FILE_RENAME_POWER, "i_ft_needed_file_rename_power", FileTransfer, "Needed file rename power";
    352 => I_FT_FILE_BROWSE_POWER, "i_ft_file_browse_power", FileTransfer, "File browse power";
    353 => I_FT_NEEDED_FILE_BROWSE_POWER, "i_ft_needed_file_browse_power", FileTransfer, "Needed file browse power";
    354 => I_FT_DIRECTORY_CREATE_POWER, "i_ft_directory_create_power", FileTransfer, "Create directory power";
    355 => I_FT_NEEDED_DIRECTORY_CREATE_POWER, "i_ft_needed_directory_create_power", FileTransfer, "Needed create directory power";
    356 => I_FT_QUOTA_MB_DOWNLOAD_PER_CLIENT, "i_ft_quota_mb_download_per_client", FileTransfer, "Download quota per client in MByte";
    357 => I_FT_QUOTA_MB_UPLOAD_PER_CLIENT, "i_ft_quota_mb_upload_per_client", FileTransfer, "Upload quota per client in MByte";
    358 => I_FT_MAX_BANDWIDTH_DOWNLOAD, "i_ft_max_bandwidth_download", FileTransfer, "Maximal download bandwidth allowed for the client";
    359 => I_FT_MAX_BANDWIDTH_UPLOAD, "i_ft_max_bandwidth_upload", FileTransfer, "Maximal download bandwidth allowed for the client";
}
